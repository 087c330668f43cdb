//! Validation pipeline building blocks
//!
//! Pure functions and result types with no I/O dependencies.

pub mod format;
pub mod outcome;

pub use format::{is_valid_format, MAX_CODE_LEN, MIN_CODE_LEN};
pub use outcome::{ValidationDetails, ValidationOutcome, ValidationStage};
