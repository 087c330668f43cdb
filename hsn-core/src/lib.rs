#![no_std]

//! HSN Core - Classification Engine for HSN Code Validation
//!
//! This crate provides the pure classification engine used to validate
//! hierarchical HSN product codes against a master reference dataset.
//!
//! ## Architecture
//!
//! The engine follows a clean specification/implementation separation:
//!
//! - **hsn-core**: digit trie, reference index, and validation pipeline
//!   (no I/O, no logging, no async)
//! - **hsn**: concrete service with data loading, configuration, and the
//!   HTTP API
//!
//! ## Quick Start
//!
//! ```rust
//! use hsn_core::{HsnError, ReferenceIndex, Validator};
//!
//! fn example() -> Result<(), HsnError> {
//!     let records = vec![
//!         ("01".to_string(), "Live animals".to_string()),
//!         ("0101".to_string(), "Horses".to_string()),
//!     ];
//!     let index = ReferenceIndex::build(records)?;
//!
//!     let validator = Validator::new(&index);
//!     let outcome = validator.full_validation("0101");
//!     assert_eq!(outcome.description(), Some("Horses"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Validation pipeline
//!
//! Validation runs three stages in order and short-circuits at the first
//! rejection:
//!
//! 1. **Format**: the input must be 2 to 8 decimal digits
//! 2. **Existence**: the code must be a key of the master mapping
//! 3. **Hierarchy**: the code's digit path is walked through the trie,
//!    collecting registered ancestors; findings are reported inside the
//!    valid outcome and never reject the code themselves
//!
//! The index is built once and read-only afterward, so it can be shared
//! across concurrent validation calls without locking.

extern crate alloc;

pub mod error;
pub mod index;
pub mod trie;
pub mod validation;
pub mod validator;

pub use error::*;
pub use index::{BuildReport, HierarchyReport, ParentCode, ReferenceIndex};
pub use trie::{DigitTrie, NodeId};
pub use validation::{
    is_valid_format, ValidationDetails, ValidationOutcome, ValidationStage, MAX_CODE_LEN,
    MIN_CODE_LEN,
};
pub use validator::{Validator, EXISTENCE_ERROR, FORMAT_ERROR};
