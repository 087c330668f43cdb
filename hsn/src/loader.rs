//! Master-data loading for the validation service
//!
//! Reads a JSON array of `{"code", "description"}` records. Shape problems
//! in individual records (malformed codes, duplicates) are left to the
//! reference index, which skips and counts them; only an unreadable file,
//! unparseable JSON, or a dataset with zero usable records is fatal.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use hsn_core::{HsnError, ReferenceIndex};

/// Errors that can occur while loading master data at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read master data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("master data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot build reference index: {0}")]
    Index(#[from] HsnError),
}

/// Codes arrive as JSON strings or bare numbers, depending on how the
/// master file was exported
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CodeField {
    Text(String),
    Number(u64),
}

impl CodeField {
    fn into_string(self) -> String {
        match self {
            CodeField::Text(code) => code,
            CodeField::Number(code) => code.to_string(),
        }
    }
}

/// One raw master-data record
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(alias = "hsncode", alias = "HSNCode")]
    code: CodeField,
    #[serde(alias = "Description")]
    description: String,
}

/// Parse master-data JSON into (code, description) pairs
pub fn parse_master_records(json: &str) -> Result<Vec<(String, String)>, LoadError> {
    let records: Vec<RawRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|record| (record.code.into_string(), record.description))
        .collect())
}

/// Read and parse the master data file
pub fn load_master_records(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, LoadError> {
    let json = std::fs::read_to_string(path)?;
    parse_master_records(&json)
}

/// Load the master data file and build the reference index, logging any
/// records the build dropped
pub fn load_index(path: impl AsRef<Path>) -> Result<ReferenceIndex, LoadError> {
    let records = load_master_records(path)?;
    let index = ReferenceIndex::build(records)?;

    let report = index.build_report();
    if report.skipped_malformed > 0 {
        tracing::warn!(
            count = report.skipped_malformed,
            "skipped records with malformed codes"
        );
    }
    if report.skipped_duplicate > 0 {
        tracing::warn!(
            count = report.skipped_duplicate,
            "skipped duplicate codes, first occurrence kept"
        );
    }
    tracing::info!(codes = report.loaded, "reference index built");

    Ok(index)
}
