//! Dataset config discovery and parsing.
//!
//! Locates a `data.yaml` dataset description anywhere under a root directory
//! and decodes it into the strongly-typed
//! [`DatasetConfig`](eyeknow_core::DatasetConfig).
//!
//! # Modules
//!
//! - [`error`]: DatasetError enum with all failure modes
//! - [`locate`]: recursive first-match search for `data.yaml`
//! - [`parse`]: typed YAML decode with required-field validation

pub mod error;
pub mod locate;
pub mod parse;

pub use error::DatasetError;
pub use locate::find_dataset_config;
pub use parse::{discover, load_dataset_config, LocatedConfig};

/// File name the locator searches for.
pub const CONFIG_FILE_NAME: &str = "data.yaml";
