//! Validation result types shared between the engine and its callers

use alloc::string::String;
use alloc::vec::Vec;

use crate::index::ParentCode;

/// Pipeline stage that rejected a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationStage {
    Format,
    Existence,
    /// Reserved for forward compatibility: hierarchy findings currently
    /// fold into a valid outcome instead of rejecting on their own
    Hierarchy,
}

impl ValidationStage {
    /// Stable wire name of the stage
    pub const fn as_str(self) -> &'static str {
        match self {
            ValidationStage::Format => "format",
            ValidationStage::Existence => "existence",
            ValidationStage::Hierarchy => "hierarchy",
        }
    }
}

impl core::fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail block attached to every valid outcome
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationDetails {
    pub format_valid: bool,
    pub exists_in_master: bool,
    pub hierarchy_valid: bool,
    /// Registered strict-prefix ancestors, shortest first
    pub parent_codes: Vec<ParentCode>,
}

/// Result of validating a single code.
///
/// Failures are data, not errors: every input string maps to exactly one of
/// these variants and validation itself never panics or returns `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum ValidationOutcome {
    Valid {
        description: String,
        validation_details: ValidationDetails,
    },
    Invalid {
        /// The input as received, before any normalization
        code: String,
        error: String,
        validation_stage: ValidationStage,
    },
}

impl ValidationOutcome {
    /// Whether the code passed format and existence checks
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }

    /// Master-data description, present only on valid outcomes
    pub fn description(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid { description, .. } => Some(description),
            ValidationOutcome::Invalid { .. } => None,
        }
    }

    /// Stage that rejected the code, present only on invalid outcomes
    pub fn rejected_stage(&self) -> Option<ValidationStage> {
        match self {
            ValidationOutcome::Valid { .. } => None,
            ValidationOutcome::Invalid {
                validation_stage, ..
            } => Some(*validation_stage),
        }
    }
}
