//! Storage error types for eyeknow-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage
//! layer: a missing or unprovisioned database, a table that does not match
//! the column contract, and wrapped SQLite failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file does not exist. Creating it is not this layer's
    /// job; the external setup process owns provisioning.
    #[error("database file not found: {}", path.display())]
    DatabaseMissing { path: PathBuf },

    /// The database exists but holds no `objects` table.
    #[error("no `objects` table in the database; it has not been provisioned")]
    MissingObjectsTable,

    /// The `objects` table exists but lacks the contract columns.
    #[error("`objects` table does not match the expected schema: {reason}")]
    SchemaMismatch { reason: String },

    /// An underlying SQLite operation failed. The per-sync transaction
    /// guarantees no partial custom rows remain visible.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
