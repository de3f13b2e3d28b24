//! Typed decode of the dataset config document.
//!
//! The file decodes through a private raw struct first, so missing optional
//! keys become `None` and a missing `names` key becomes a dedicated error
//! instead of flowing downstream as absent data. Keys the pipeline does not
//! care about (`train`, `val`, `test`, ...) are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use eyeknow_core::DatasetConfig;

use crate::error::DatasetError;
use crate::locate::find_dataset_config;

/// Raw document shape as serde sees it. `names` is optional here so its
/// absence can be reported as [`DatasetError::MissingNames`] rather than a
/// generic parse failure.
#[derive(Debug, Deserialize)]
struct RawDatasetConfig {
    path: Option<String>,
    nc: Option<i64>,
    names: Option<Vec<String>>,
}

/// A located and decoded dataset config.
#[derive(Debug, Clone)]
pub struct LocatedConfig {
    /// Where `data.yaml` was found.
    pub path: PathBuf,
    /// The decoded document.
    pub config: DatasetConfig,
}

/// Reads and decodes the config file at `path`.
pub fn load_dataset_config(path: &Path) -> Result<DatasetConfig, DatasetError> {
    let text = fs::read_to_string(path)?;
    let raw: RawDatasetConfig =
        serde_yaml::from_str(&text).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let names = raw.names.ok_or_else(|| DatasetError::MissingNames {
        path: path.to_path_buf(),
    })?;
    Ok(DatasetConfig {
        path: raw.path,
        nc: raw.nc,
        names,
    })
}

/// Locates `data.yaml` under `root` and decodes it.
pub fn discover(root: &Path) -> Result<LocatedConfig, DatasetError> {
    let path = find_dataset_config(root)?;
    let config = load_dataset_config(&path)?;
    tracing::debug!(
        classes = config.names.len(),
        path = %path.display(),
        "decoded dataset config"
    );
    Ok(LocatedConfig { path, config })
}
