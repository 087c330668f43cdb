//! Reference index over the HSN master dataset
//!
//! Owns the code -> description mapping and the digit trie built from it.
//! The index is built once at startup and never mutated afterward, so it can
//! be shared across arbitrarily many concurrent validation calls without
//! locking.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::trie::DigitTrie;
use crate::{HsnError, Result};

/// A registered strict-prefix ancestor of a validated code
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentCode {
    pub code: String,
    pub description: String,
}

/// Counters for records dropped while building the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Records inserted into the index
    pub loaded: usize,
    /// Records whose code was not a non-empty digit string
    pub skipped_malformed: usize,
    /// Records whose code was already present (first occurrence wins)
    pub skipped_duplicate: usize,
}

/// Outcome of walking a code's digit path through the trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyReport {
    /// False only when a digit of the code has no trie edge at all
    pub hierarchy_valid: bool,
    /// Registered ancestors in increasing-length order
    pub parent_codes: Vec<ParentCode>,
    /// Human-readable diagnostics collected along the walk
    pub notes: Vec<String>,
}

/// Immutable code -> description mapping plus the trie over its keys.
///
/// Invariant: every key in the mapping has a trie path from the root ending
/// in a terminal node, and every terminal trie path corresponds to a key.
pub struct ReferenceIndex {
    codes: HashMap<String, String>,
    trie: DigitTrie,
    report: BuildReport,
}

impl ReferenceIndex {
    /// Build the index from raw (code, description) pairs.
    ///
    /// Codes and descriptions are trimmed. Codes that are not non-empty
    /// decimal digit strings are skipped, as are duplicate codes (first
    /// occurrence wins); both events are counted in the build report rather
    /// than treated as fatal. Fails only when no usable record remains.
    pub fn build(records: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let mut codes = HashMap::new();
        let mut trie = DigitTrie::new();
        let mut report = BuildReport::default();

        for (code, description) in records {
            let code = code.trim();
            if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
                report.skipped_malformed += 1;
                continue;
            }
            if codes.contains_key(code) {
                report.skipped_duplicate += 1;
                continue;
            }

            trie.insert(code)?;
            codes.insert(String::from(code), String::from(description.trim()));
            report.loaded += 1;
        }

        if codes.is_empty() {
            return Err(HsnError::EmptyDataset);
        }

        Ok(Self {
            codes,
            trie,
            report,
        })
    }

    /// Exact description lookup after stripping all whitespace from the input.
    ///
    /// An unknown code is `None`, never an error.
    pub fn lookup_description(&self, code: &str) -> Option<&str> {
        let code = normalize(code);
        self.codes.get(code.as_ref()).map(String::as_str)
    }

    /// Whether `code` is registered in the master data
    pub fn contains(&self, code: &str) -> bool {
        self.lookup_description(code).is_some()
    }

    /// Number of registered codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when no codes are registered (unreachable after `build`)
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Counters recorded while the index was built
    pub fn build_report(&self) -> BuildReport {
        self.report
    }

    /// The digit trie over all registered codes
    pub fn trie(&self) -> &DigitTrie {
        &self.trie
    }

    /// Walk the trie along `code`, collecting registered ancestors.
    ///
    /// A missing trie edge is a hard failure: the walk stops there, since
    /// trailing structure is unverifiable past a gap. An ancestor prefix
    /// whose trie path exists but which was never registered as a code of
    /// its own only produces a note and leaves the hierarchy valid. The
    /// code itself is never reported as its own parent.
    pub fn validate_hierarchy(&self, code: &str) -> HierarchyReport {
        let code = normalize(code);
        let code = code.as_ref();
        let mut report = HierarchyReport {
            hierarchy_valid: true,
            parent_codes: Vec::new(),
            notes: Vec::new(),
        };

        let mut node = DigitTrie::ROOT;
        for (position, (offset, digit)) in code.char_indices().enumerate() {
            match self.trie.child(node, digit) {
                Some(child) => node = child,
                None => {
                    report.hierarchy_valid = false;
                    report
                        .notes
                        .push(format!("Missing digit '{digit}' at position {}", position + 1));
                    break;
                }
            }

            let end = offset + digit.len_utf8();
            if end == code.len() {
                break;
            }

            let prefix = &code[..end];
            match self.codes.get(prefix) {
                Some(description) => report.parent_codes.push(ParentCode {
                    code: String::from(prefix),
                    description: description.clone(),
                }),
                None => report
                    .notes
                    .push(format!("Parent code '{prefix}' not in master data")),
            }
        }

        report
    }
}

/// Remove surrounding and internal whitespace without allocating in the
/// common no-whitespace case
fn normalize(code: &str) -> Cow<'_, str> {
    if code.chars().any(char::is_whitespace) {
        Cow::Owned(code.chars().filter(|c| !c.is_whitespace()).collect())
    } else {
        Cow::Borrowed(code)
    }
}
