//! Core error types for eyeknow-core.
//!
//! Uses `thiserror` for structured, matchable error variants.

use crate::class::ClassId;
use thiserror::Error;

/// Errors produced by the core data model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A built-in row was handed to the class mapping builder, which only
    /// accepts rows from the custom partition.
    #[error("class id {id} is below the custom partition base", id = id.0)]
    NotACustomClass { id: ClassId },
}
