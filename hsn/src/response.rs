//! Wire-format shaping for validation responses
//!
//! The engine reports outcomes as data; this module arranges that data into
//! the JSON shapes the API serves, including the boundary case of request
//! items that are not JSON strings at all.

use serde::Serialize;
use serde_json::Value;

use hsn_core::{ValidationDetails, ValidationOutcome, ValidationStage, Validator};

/// Message for request items that are not JSON strings
pub const TYPE_ERROR: &str = "HSN code must be a string";

/// Payload served for a code that passed validation
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub status: &'static str,
    pub hsn_code: String,
    pub description: String,
    pub validation_details: ValidationDetails,
}

/// Error block nested inside an invalid-code payload
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    /// Stage name suffixed with `_error`, e.g. `existence_error`
    #[serde(rename = "type")]
    pub kind: String,
    /// Present only for existence errors, and always empty: suggestion
    /// generation is a declared feature with no implementation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Payload served for a code that failed validation
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    /// Echo of the raw input, which may not be a string
    pub hsn_code: Value,
    pub error: ErrorBody,
}

/// One entry of a validation response, single or batch
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ValidationResponse {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl ValidationResponse {
    /// Shape one raw request item.
    ///
    /// Strings go through the full pipeline; anything else fails the format
    /// stage with a type message, mirroring what the engine cannot express
    /// in its typed API.
    pub fn for_input(validator: &Validator<'_>, input: &Value) -> Self {
        match input.as_str() {
            Some(code) => Self::from_outcome(code, validator.full_validation(code)),
            None => ValidationResponse::Error(ErrorResponse {
                status: "invalid",
                hsn_code: input.clone(),
                error: ErrorBody {
                    message: TYPE_ERROR.to_string(),
                    kind: stage_kind(ValidationStage::Format),
                    suggestions: None,
                },
            }),
        }
    }

    /// Arrange an engine outcome into its wire shape.
    ///
    /// `input` is the code as it appeared in the request; valid outcomes do
    /// not carry it themselves.
    pub fn from_outcome(input: &str, outcome: ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid {
                description,
                validation_details,
            } => ValidationResponse::Success(SuccessResponse {
                status: "valid",
                hsn_code: input.to_string(),
                description,
                validation_details,
            }),
            ValidationOutcome::Invalid {
                code,
                error,
                validation_stage,
            } => ValidationResponse::Error(ErrorResponse {
                status: "invalid",
                hsn_code: Value::String(code),
                error: ErrorBody {
                    message: error,
                    kind: stage_kind(validation_stage),
                    suggestions: (validation_stage == ValidationStage::Existence)
                        .then(Vec::new),
                },
            }),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResponse::Success(_))
    }
}

fn stage_kind(stage: ValidationStage) -> String {
    format!("{stage}_error")
}
