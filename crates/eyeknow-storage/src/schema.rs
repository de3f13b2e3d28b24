//! Contract verification against the externally-provisioned `objects` table.
//!
//! This layer never creates or migrates the table; an external setup process
//! owns it. Opening a store therefore only checks that the table exists and
//! carries the three columns the synchronizer touches, and refuses to operate
//! otherwise.

use rusqlite::Connection;

use crate::error::StorageError;

/// Table the synchronizer operates on.
pub const OBJECTS_TABLE: &str = "objects";

/// Columns the synchronizer reads and writes. The provisioned table may
/// carry more (`id`, `category`, `created_at`); extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["class_id", "name", "description"];

/// Reference copy of the DDL the external setup tool applies.
///
/// Kept here so tests can provision fixture databases with the same shape
/// the tool expects in production. Runtime code never executes it.
pub const PROVISIONED_DDL: &str = "\
CREATE TABLE IF NOT EXISTS objects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    class_id INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT,
    category TEXT DEFAULT 'general',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_class_id ON objects(class_id);
CREATE INDEX IF NOT EXISTS idx_name ON objects(name);
";

/// Verifies the connection exposes an `objects` table with the contract
/// columns.
pub fn verify_objects_table(conn: &Connection) -> Result<(), StorageError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [OBJECTS_TABLE],
        |row| row.get(0),
    )?;
    if !exists {
        return Err(StorageError::MissingObjectsTable);
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let columns: Vec<String> = stmt
        .query_map([OBJECTS_TABLE], |row| row.get(0))?
        .collect::<Result<_, _>>()?;
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(StorageError::SchemaMismatch {
                reason: format!("missing column `{}`", required),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisioned_ddl_passes_verification() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(PROVISIONED_DDL).unwrap();
        verify_objects_table(&conn).unwrap();
    }

    #[test]
    fn minimal_contract_table_passes_verification() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE objects (class_id INTEGER PRIMARY KEY, name TEXT, description TEXT)",
        )
        .unwrap();
        verify_objects_table(&conn).unwrap();
    }

    #[test]
    fn empty_database_is_unprovisioned() {
        let conn = Connection::open_in_memory().unwrap();
        let err = verify_objects_table(&conn).unwrap_err();
        assert!(matches!(err, StorageError::MissingObjectsTable));
    }

    #[test]
    fn missing_contract_column_is_a_mismatch() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE objects (class_id INTEGER PRIMARY KEY, name TEXT)")
            .unwrap();
        let err = verify_objects_table(&conn).unwrap_err();
        match err {
            StorageError::SchemaMismatch { reason } => {
                assert!(reason.contains("description"));
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }
}
