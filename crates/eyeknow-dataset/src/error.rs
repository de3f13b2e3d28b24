//! Error types for dataset discovery and parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while locating or decoding a dataset config.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// No `data.yaml` exists anywhere under the searched root.
    ///
    /// Callers treat this as "nothing to do": it is reported to the user and
    /// the run ends without touching storage or writing a mapping.
    #[error("no data.yaml found under {}", root.display())]
    NotFound { root: PathBuf },

    /// The config file exists but is not valid YAML for the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but carries no `names` key.
    ///
    /// `names` is the authoritative class list; without it the rest of the
    /// pipeline has nothing to act on, so the document is rejected up front.
    #[error("{} has no `names` key", path.display())]
    MissingNames { path: PathBuf },

    /// Reading the config file or walking the tree failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
