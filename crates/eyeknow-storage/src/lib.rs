//! Storage abstraction for the `objects` table.
//!
//! Provides the [`ObjectStore`] trait defining the synchronization contract,
//! plus [`InMemoryStore`] and [`SqliteStore`] as first-class backends.
//!
//! # Architecture
//!
//! The table is split into two partitions by `class_id`: built-in rows below
//! 1000 are owned by an external process and never touched here; custom rows
//! at 1000 and above are exclusively owned by this layer and rewritten
//! wholesale on every sync (delete the range, insert one row per label,
//! commit as a single unit, read the range back as confirmation).
//!
//! The store never creates the `objects` table: provisioning belongs to an
//! external setup process, and a database without the table is a schema
//! error before any mutation happens.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`schema`]: contract verification against the provisioned table
//! - [`traits`]: ObjectStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ObjectStore;
