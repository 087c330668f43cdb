//! HSN - HSN Code Validation Service
//!
//! Service layer over the `hsn-core` classification engine: master-data
//! loading, process configuration, response shaping, and the HTTP API
//! served by the `hsnd` binary.
//!
//! ## Architecture
//!
//! - **hsn-core**: pure engine (digit trie, reference index, validation
//!   pipeline), no I/O
//! - **hsn**: everything that touches the outside world
//!
//! The reference index is built once at startup from a JSON master file and
//! shared read-only across all request handlers.

// Re-export the engine so service consumers need a single dependency
pub use hsn_core::{
    BuildReport, HierarchyReport, HsnError, ParentCode, ReferenceIndex, ValidationDetails,
    ValidationOutcome, ValidationStage, Validator,
};

pub mod config;
pub mod loader;
pub mod response;
pub mod server;

pub use config::Config;
pub use loader::{load_index, load_master_records, parse_master_records, LoadError};
pub use response::ValidationResponse;
pub use server::{app, AppState};
