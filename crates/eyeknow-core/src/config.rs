//! The typed `data.yaml` dataset description.
//!
//! Only three keys matter to the pipeline: `path` and `nc` are informational,
//! `names` is the authoritative ordered list of class labels. Everything else
//! in the document (`train`, `val`, `test`, ...) is ignored by the decoder.

use serde::{Deserialize, Serialize};

/// Parsed dataset description.
///
/// `names` is required and authoritative; construction goes through the
/// dataset crate's decoder, which rejects documents that lack it. No
/// uniqueness or non-emptiness constraint is placed on the labels, and `nc`
/// is never validated against `names.len()` -- a disagreement is surfaced as
/// an informational mismatch only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset root recorded in the document, if any. Informational.
    pub path: Option<String>,
    /// Declared class count, if any. Informational.
    pub nc: Option<i64>,
    /// Ordered class labels; the source of truth for the sync.
    pub names: Vec<String>,
}

impl DatasetConfig {
    /// Returns `(declared, actual)` when `nc` disagrees with the number of
    /// labels, `None` when it matches or is absent.
    pub fn nc_mismatch(&self) -> Option<(i64, usize)> {
        match self.nc {
            Some(declared) if declared != self.names.len() as i64 => {
                Some((declared, self.names.len()))
            }
            _ => None,
        }
    }
}
