//! SQLite implementation of [`ObjectStore`].
//!
//! [`SqliteStore`] wraps a `rusqlite::Connection` to the database holding the
//! `objects` table. Every sync runs inside a transaction so a mid-batch
//! failure leaves no partial custom rows. Opening never creates the database
//! file or the table; both are provisioned externally and verified here
//! before any mutation.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags};

use eyeknow_core::{ClassId, ObjectRecord, CUSTOM_CLASS_BASE};

use crate::error::StorageError;
use crate::schema;
use crate::traits::ObjectStore;

/// SQLite-backed implementation of [`ObjectStore`].
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the database at `path`.
    ///
    /// Refuses to create a missing file and verifies the `objects` table
    /// before returning, so a schema problem surfaces before any mutation.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            return Err(StorageError::DatabaseMissing {
                path: path.to_path_buf(),
            });
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI,
        )?;
        Self::from_connection(conn)
    }

    /// Wraps an existing connection after verifying the `objects` table.
    ///
    /// This is the seam tests use with in-memory databases provisioned by
    /// the fixture DDL.
    pub fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        schema::verify_objects_table(&conn)?;
        Ok(SqliteStore { conn })
    }
}

impl ObjectStore for SqliteStore {
    fn sync_custom_classes(
        &mut self,
        names: &[String],
    ) -> Result<Vec<ObjectRecord>, StorageError> {
        let tx = self.conn.transaction()?;

        let deleted = tx.execute(
            "DELETE FROM objects WHERE class_id >= ?1",
            params![CUSTOM_CLASS_BASE],
        )?;

        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO objects (class_id, name, description) VALUES (?1, ?2, ?3)",
            )?;
            for (index, name) in names.iter().enumerate() {
                let record = ObjectRecord::custom(index, name);
                stmt.execute(params![record.class_id.0, record.name, record.description])?;
            }
        }

        tx.commit()?;
        tracing::debug!(deleted, inserted = names.len(), "synchronized custom classes");

        self.list_custom_classes()
    }

    fn list_custom_classes(&self) -> Result<Vec<ObjectRecord>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT class_id, name, description FROM objects WHERE class_id >= ?1 ORDER BY class_id",
        )?;
        let rows = stmt.query_map(params![CUSTOM_CLASS_BASE], |row| {
            let class_id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            let description: Option<String> = row.get(2)?;
            Ok((class_id, name, description))
        })?;
        let mut result = Vec::new();
        for row in rows {
            let (class_id, name, description) = row?;
            result.push(ObjectRecord {
                class_id: ClassId(class_id),
                name,
                description: description.unwrap_or_default(),
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provisioned_store() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(schema::PROVISIONED_DDL).unwrap();
        SqliteStore::from_connection(conn).unwrap()
    }

    fn seeded_store() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(schema::PROVISIONED_DDL).unwrap();
        // Built-in rows the external process owns, plus stale custom rows
        // from an earlier, longer sync.
        conn.execute_batch(
            "INSERT INTO objects (class_id, name, description) VALUES
                (0, 'person', 'Human person'),
                (2, 'car', 'Motor vehicle car'),
                (1000, 'old-a', 'Custom object: old-a'),
                (1001, 'old-b', 'Custom object: old-b'),
                (1002, 'old-c', 'Custom object: old-c');",
        )
        .unwrap();
        SqliteStore::from_connection(conn).unwrap()
    }

    fn names(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn open_refuses_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SqliteStore::open(&dir.path().join("absent.db")).unwrap_err();
        assert!(matches!(err, StorageError::DatabaseMissing { .. }));
    }

    #[test]
    fn unprovisioned_database_is_rejected_before_any_mutation() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteStore::from_connection(conn).unwrap_err();
        assert!(matches!(err, StorageError::MissingObjectsTable));
    }

    #[test]
    fn sync_fills_the_custom_partition_in_order() {
        let mut store = provisioned_store();
        let records = store.sync_custom_classes(&names(&["cat", "dog"])).unwrap();

        assert_eq!(
            records,
            vec![
                ObjectRecord {
                    class_id: ClassId(1000),
                    name: "cat".to_string(),
                    description: "Custom object: cat".to_string(),
                },
                ObjectRecord {
                    class_id: ClassId(1001),
                    name: "dog".to_string(),
                    description: "Custom object: dog".to_string(),
                },
            ]
        );
    }

    #[test]
    fn shrinking_the_label_list_leaves_no_stale_rows() {
        let mut store = seeded_store();
        let records = store.sync_custom_classes(&names(&["key"])).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].class_id, ClassId(1000));
        assert_eq!(records[0].name, "key");
        assert_eq!(store.list_custom_classes().unwrap().len(), 1);
    }

    #[test]
    fn empty_label_list_empties_the_custom_partition() {
        let mut store = seeded_store();
        let records = store.sync_custom_classes(&[]).unwrap();

        assert!(records.is_empty());
        assert!(store.list_custom_classes().unwrap().is_empty());
    }

    #[test]
    fn builtin_rows_survive_every_sync() {
        let mut store = seeded_store();
        store.sync_custom_classes(&names(&["banana"])).unwrap();
        store.sync_custom_classes(&[]).unwrap();

        let builtin: Vec<(i64, String)> = {
            let mut stmt = store
                .conn
                .prepare("SELECT class_id, name FROM objects WHERE class_id < 1000 ORDER BY class_id")
                .unwrap();
            stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap()
        };
        assert_eq!(
            builtin,
            vec![(0, "person".to_string()), (2, "car".to_string())]
        );
    }

    #[test]
    fn rerunning_the_same_sync_is_idempotent() {
        let mut store = provisioned_store();
        let first = store.sync_custom_classes(&names(&["cat", "dog"])).unwrap();
        let second = store.sync_custom_classes(&names(&["cat", "dog"])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_labels_pass_through_unchanged() {
        let mut store = provisioned_store();
        let records = store
            .sync_custom_classes(&names(&["bottle", "bottle"]))
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "bottle");
        assert_eq!(records[1].name, "bottle");
        assert_ne!(records[0].class_id, records[1].class_id);
    }

    #[test]
    fn file_backed_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("eyeknow_objects.db");
        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch(schema::PROVISIONED_DDL).unwrap();
        }

        let mut store = SqliteStore::open(&db_path).unwrap();
        store.sync_custom_classes(&names(&["umbrella"])).unwrap();
        drop(store);

        let store = SqliteStore::open(&db_path).unwrap();
        let records = store.list_custom_classes().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "umbrella");
    }
}
