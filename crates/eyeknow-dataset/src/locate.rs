//! Recursive search for the dataset config file.
//!
//! Walks the root directory and every nested directory (depth unbounded) and
//! returns the first file literally named `data.yaml`. The traversal order
//! across sibling directories is whatever the platform's directory walk
//! yields; first match wins.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DatasetError;
use crate::CONFIG_FILE_NAME;

/// Finds the first `data.yaml` under `root`.
///
/// Returns [`DatasetError::NotFound`] when the whole tree holds no such file.
pub fn find_dataset_config(root: &Path) -> Result<PathBuf, DatasetError> {
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| DatasetError::Io(e.into()))?;
        if entry.file_type().is_file() && entry.file_name() == CONFIG_FILE_NAME {
            tracing::debug!(path = %entry.path().display(), "located dataset config");
            return Ok(entry.path().to_path_buf());
        }
    }
    Err(DatasetError::NotFound {
        root: root.to_path_buf(),
    })
}
