//! Class identity and the persisted object record.
//!
//! The `objects` table is split into two partitions by [`ClassId`]: built-in
//! entries below [`CUSTOM_CLASS_BASE`] belong to an external process and are
//! never touched, while entries at or above it are fully owned (and fully
//! rewritten) by the sync pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// First identifier of the custom class partition.
///
/// Rows with `class_id >= CUSTOM_CLASS_BASE` are owned by this tool; rows
/// below it are built-in entries managed elsewhere.
pub const CUSTOM_CLASS_BASE: i64 = 1000;

/// Identifier of a class row in the `objects` table.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassId(pub i64);

impl ClassId {
    /// Returns the identifier assigned to the custom class at `index`.
    pub fn custom(index: usize) -> Self {
        ClassId(CUSTOM_CLASS_BASE + index as i64)
    }

    /// Whether this identifier falls in the custom partition.
    pub fn is_custom(self) -> bool {
        self.0 >= CUSTOM_CLASS_BASE
    }

    /// Zero-based position of this identifier within the custom partition,
    /// or `None` for a built-in identifier.
    pub fn custom_index(self) -> Option<usize> {
        if self.is_custom() {
            Some((self.0 - CUSTOM_CLASS_BASE) as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row of the `objects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Identifying key; determines the partition the row belongs to.
    pub class_id: ClassId,
    /// Class label as discovered in the dataset config.
    pub name: String,
    /// Human-readable description stored alongside the label.
    pub description: String,
}

impl ObjectRecord {
    /// Builds the custom-partition row for the class at `index`.
    ///
    /// The description follows the fixed `"Custom object: <name>"` form the
    /// rest of the system expects.
    pub fn custom(index: usize, name: &str) -> Self {
        ObjectRecord {
            class_id: ClassId::custom(index),
            name: name.to_string(),
            description: format!("Custom object: {}", name),
        }
    }
}
