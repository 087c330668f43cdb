//! Format validation for raw HSN code input
//!
//! Character-level checks, equivalent to the pattern `^\d{2,8}$` without
//! pulling in a regex engine.

/// Shortest accepted code length in digits
pub const MIN_CODE_LEN: usize = 2;

/// Longest accepted code length in digits
pub const MAX_CODE_LEN: usize = 8;

/// Whether the raw input is 2 to 8 ASCII decimal digits and nothing else.
///
/// Runs on the input exactly as received; whitespace is not forgiven here,
/// only later during index lookups.
pub fn is_valid_format(code: &str) -> bool {
    (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digit_strings_within_bounds() {
        assert!(is_valid_format("01"));
        assert!(is_valid_format("9983"));
        assert!(is_valid_format("01011010"));
    }

    #[test]
    fn test_rejects_out_of_bounds_lengths() {
        assert!(!is_valid_format(""));
        assert!(!is_valid_format("1"));
        assert!(!is_valid_format("010110101"));
    }

    #[test]
    fn test_rejects_non_digit_characters() {
        assert!(!is_valid_format("01a1"));
        assert!(!is_valid_format(" 0101"));
        assert!(!is_valid_format("0101 "));
        assert!(!is_valid_format("01-01"));
        // Non-ASCII digits do not count
        assert!(!is_valid_format("٠١٢٣"));
    }
}
