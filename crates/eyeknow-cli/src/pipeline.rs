//! The sync pipeline: locate -> parse -> synchronize -> emit mapping.
//!
//! Stages run strictly in order and any failure aborts the remainder. The
//! store is opened lazily, after the dataset config has been located and
//! decoded, so a run that finds nothing to sync never touches storage. The
//! emitted mapping is built from the rows the store confirms after commit,
//! never re-derived from the input, so the artifact cannot describe state
//! the store does not hold.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use eyeknow_core::{ClassMapping, CoreError, DatasetConfig, ObjectRecord};
use eyeknow_dataset::{discover, DatasetError};
use eyeknow_storage::{ObjectStore, StorageError};

/// Errors produced by the pipeline, composed from each stage's taxonomy.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Locating or decoding the dataset config failed.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Synchronizing the store failed. The sync transaction guarantees no
    /// partial custom rows; nothing has been emitted yet.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Building the mapping from confirmed rows failed.
    #[error("mapping error: {0}")]
    Mapping(#[from] CoreError),

    /// Rendering the mapping as JSON failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the mapping file failed. The store has already committed by
    /// this point, so the mapping on disk (if any) is stale.
    #[error("failed to write mapping to {}: {source}", path.display())]
    MappingWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything a successful run produced, for reporting.
#[derive(Debug)]
pub struct PipelineReport {
    /// Where `data.yaml` was found.
    pub config_path: PathBuf,
    /// The decoded dataset config.
    pub config: DatasetConfig,
    /// Custom rows as confirmed by the store after commit.
    pub records: Vec<ObjectRecord>,
    /// The mapping that was written.
    pub mapping: ClassMapping,
}

/// Runs the full pipeline under `root`, writing the mapping to
/// `mapping_path`.
///
/// `open_store` is called only after a config has been located and decoded,
/// so locator and parser failures leave storage untouched.
pub fn run<S, F>(
    root: &Path,
    open_store: F,
    mapping_path: &Path,
) -> Result<PipelineReport, PipelineError>
where
    S: ObjectStore,
    F: FnOnce() -> Result<S, StorageError>,
{
    let located = discover(root)?;

    let mut store = open_store()?;
    let records = store.sync_custom_classes(&located.config.names)?;

    let mapping = ClassMapping::from_records(&records)?;
    let json = mapping.to_json_pretty()?;
    fs::write(mapping_path, json).map_err(|source| PipelineError::MappingWrite {
        path: mapping_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        classes = records.len(),
        mapping = %mapping_path.display(),
        "pipeline complete"
    );

    Ok(PipelineReport {
        config_path: located.path,
        config: located.config,
        records,
        mapping,
    })
}
