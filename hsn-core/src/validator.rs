//! Three-stage validation pipeline over a reference index
//!
//! Stages run in order (format, existence, hierarchy) and short-circuit at
//! the first rejection. The hierarchy stage never rejects on its own; its
//! findings are folded into the valid outcome.

use alloc::string::String;
use alloc::vec::Vec;

use crate::index::ReferenceIndex;
use crate::validation::{is_valid_format, ValidationDetails, ValidationOutcome, ValidationStage};

/// Rejection message for the format stage
pub const FORMAT_ERROR: &str = "HSN code must be 2-8 digits";

/// Rejection message for the existence stage
pub const EXISTENCE_ERROR: &str = "HSN code not found in master data";

/// Stateless validator borrowing a read-only reference index.
///
/// Holds no mutable state, so any number of validators and calls may run
/// concurrently against the same index.
#[derive(Clone, Copy)]
pub struct Validator<'a> {
    index: &'a ReferenceIndex,
}

impl<'a> Validator<'a> {
    pub fn new(index: &'a ReferenceIndex) -> Self {
        Self { index }
    }

    /// Run the full pipeline for one code.
    ///
    /// A pure function of the input and the index: deterministic,
    /// idempotent, and panic-free for any input string. Failures come back
    /// as `ValidationOutcome::Invalid`, never as an error.
    pub fn full_validation(&self, code: &str) -> ValidationOutcome {
        if !is_valid_format(code) {
            return ValidationOutcome::Invalid {
                code: String::from(code),
                error: String::from(FORMAT_ERROR),
                validation_stage: ValidationStage::Format,
            };
        }

        let description = match self.index.lookup_description(code) {
            Some(description) => String::from(description),
            None => {
                return ValidationOutcome::Invalid {
                    code: String::from(code),
                    error: String::from(EXISTENCE_ERROR),
                    validation_stage: ValidationStage::Existence,
                }
            }
        };

        let hierarchy = self.index.validate_hierarchy(code);

        ValidationOutcome::Valid {
            description,
            validation_details: ValidationDetails {
                format_valid: true,
                exists_in_master: true,
                hierarchy_valid: hierarchy.hierarchy_valid,
                parent_codes: hierarchy.parent_codes,
            },
        }
    }

    /// Validate a batch, preserving input order with one outcome per item.
    ///
    /// Pure fan-out: items are fully independent and a failing item never
    /// affects its neighbors or terminates the batch. Empty input yields
    /// empty output.
    pub fn validate_multiple<I, S>(&self, codes: I) -> Vec<ValidationOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|code| self.full_validation(code.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ParentCode;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample_index() -> ReferenceIndex {
        ReferenceIndex::build(vec![
            ("01".to_string(), "Live animals".to_string()),
            ("0101".to_string(), "Horses".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_code_with_parent() {
        let index = sample_index();
        let outcome = Validator::new(&index).full_validation("0101");

        match outcome {
            ValidationOutcome::Valid {
                description,
                validation_details,
            } => {
                assert_eq!(description, "Horses");
                assert!(validation_details.format_valid);
                assert!(validation_details.exists_in_master);
                assert!(validation_details.hierarchy_valid);
                assert_eq!(
                    validation_details.parent_codes,
                    vec![ParentCode {
                        code: "01".to_string(),
                        description: "Live animals".to_string(),
                    }]
                );
            }
            ValidationOutcome::Invalid { .. } => panic!("expected valid outcome"),
        }
    }

    #[test]
    fn test_format_rejection_precedes_existence() {
        let index = sample_index();
        let validator = Validator::new(&index);

        // Too short, too long, and non-digit inputs all stop at format
        for input in ["1", "123456789", "01a1", " 0101", ""] {
            let outcome = validator.full_validation(input);
            assert_eq!(
                outcome.rejected_stage(),
                Some(ValidationStage::Format),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_unknown_code_fails_existence() {
        let index = sample_index();
        // Trie path breaks at the last digit, but existence rejects first
        let outcome = Validator::new(&index).full_validation("0102");

        match outcome {
            ValidationOutcome::Invalid {
                code,
                error,
                validation_stage,
            } => {
                assert_eq!(code, "0102");
                assert_eq!(error, EXISTENCE_ERROR);
                assert_eq!(validation_stage, ValidationStage::Existence);
            }
            ValidationOutcome::Valid { .. } => panic!("expected invalid outcome"),
        }
    }

    #[test]
    fn test_unregistered_ancestors_stay_valid() {
        let index =
            ReferenceIndex::build(vec![("0101".to_string(), "Horses".to_string())]).unwrap();
        let outcome = Validator::new(&index).full_validation("0101");

        match outcome {
            ValidationOutcome::Valid {
                validation_details, ..
            } => {
                assert!(validation_details.hierarchy_valid);
                assert!(validation_details.parent_codes.is_empty());
            }
            ValidationOutcome::Invalid { .. } => panic!("expected valid outcome"),
        }
    }

    #[test]
    fn test_full_validation_is_idempotent() {
        let index = sample_index();
        let validator = Validator::new(&index);

        for code in ["0101", "0102", "bogus"] {
            assert_eq!(
                validator.full_validation(code),
                validator.full_validation(code)
            );
        }
    }

    #[test]
    fn test_validate_multiple_preserves_order_and_isolation() {
        let index = sample_index();
        let validator = Validator::new(&index);

        let inputs = ["0101", "not-a-code", "01", "9999"];
        let outcomes = validator.validate_multiple(inputs);

        assert_eq!(outcomes.len(), inputs.len());
        assert_eq!(outcomes[0].description(), Some("Horses"));
        assert_eq!(outcomes[1].rejected_stage(), Some(ValidationStage::Format));
        assert_eq!(outcomes[2].description(), Some("Live animals"));
        assert_eq!(
            outcomes[3].rejected_stage(),
            Some(ValidationStage::Existence)
        );

        // Batch is equivalent to mapping full_validation over each item
        for (input, outcome) in inputs.iter().zip(&outcomes) {
            assert_eq!(outcome, &validator.full_validation(input));
        }
    }

    #[test]
    fn test_validate_multiple_empty_input() {
        let index = sample_index();
        let outcomes = Validator::new(&index).validate_multiple(Vec::<&str>::new());
        assert!(outcomes.is_empty());
    }
}
