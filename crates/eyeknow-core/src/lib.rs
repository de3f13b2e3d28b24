//! Core data model for the EyeKnow class sync tool.
//!
//! Defines the types shared by the dataset parser, the storage layer, and the
//! CLI:
//!
//! - [`class`]: class identifiers and the persisted object record
//! - [`config`]: the typed `data.yaml` document
//! - [`mapping`]: the emitted index-to-class lookup artifact
//! - [`error`]: CoreError enum with all failure modes

pub mod class;
pub mod config;
pub mod error;
pub mod mapping;

// Re-export commonly used types
pub use class::{ClassId, ObjectRecord, CUSTOM_CLASS_BASE};
pub use config::DatasetConfig;
pub use error::CoreError;
pub use mapping::{ClassMapping, ClassMappingEntry};
