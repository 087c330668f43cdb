//! Error types for HSN validation operations

/// Errors that can occur while building the reference index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsnError {
    /// No usable records survived filtering; nothing to validate against
    EmptyDataset,
    /// A code contained a character outside '0'..='9'
    NonDigit,
}

impl core::fmt::Display for HsnError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            HsnError::EmptyDataset => "No HSN data available to build the reference index",
            HsnError::NonDigit => "HSN code contains non-digit characters",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for HsnError {}

/// Result type for HSN index operations
pub type Result<T> = core::result::Result<T, HsnError>;
