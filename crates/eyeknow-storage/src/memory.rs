//! In-memory implementation of [`ObjectStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and anywhere
//! persistence isn't needed. It keeps the whole `objects` table in a
//! `BTreeMap` keyed by class id, with identical partition semantics to the
//! SQLite backend.

use std::collections::BTreeMap;

use eyeknow_core::{ClassId, ObjectRecord};

use crate::error::StorageError;
use crate::traits::ObjectStore;

/// Map-backed implementation of [`ObjectStore`].
///
/// The `BTreeMap` keeps rows ordered by class id, so reads come back in the
/// same order the SQLite backend produces.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    objects: BTreeMap<ClassId, ObjectRecord>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Creates a store pre-seeded with rows, for tests that need built-in
    /// entries or stale custom rows in place before a sync.
    pub fn from_records(records: impl IntoIterator<Item = ObjectRecord>) -> Self {
        InMemoryStore {
            objects: records
                .into_iter()
                .map(|record| (record.class_id, record))
                .collect(),
        }
    }

    /// Rows in the built-in partition, ordered by class id. Test-facing:
    /// the sync contract never touches these.
    pub fn builtin_rows(&self) -> Vec<ObjectRecord> {
        self.objects
            .values()
            .filter(|record| !record.class_id.is_custom())
            .cloned()
            .collect()
    }
}

impl ObjectStore for InMemoryStore {
    fn sync_custom_classes(
        &mut self,
        names: &[String],
    ) -> Result<Vec<ObjectRecord>, StorageError> {
        self.objects.retain(|id, _| !id.is_custom());
        for (index, name) in names.iter().enumerate() {
            let record = ObjectRecord::custom(index, name);
            self.objects.insert(record.class_id, record);
        }
        self.list_custom_classes()
    }

    fn list_custom_classes(&self) -> Result<Vec<ObjectRecord>, StorageError> {
        Ok(self
            .objects
            .values()
            .filter(|record| record.class_id.is_custom())
            .cloned()
            .collect())
    }
}
