//! The `status` report: a tolerant, read-only look at integration state.
//!
//! Each probe (dataset config, database, mapping file) degrades to a warning
//! line instead of failing the report, so the command always exits cleanly
//! and shows as much as it can.

use std::fs;
use std::path::Path;

use eyeknow_core::ClassMapping;
use eyeknow_dataset::{discover, DatasetError};
use eyeknow_storage::{ObjectStore, SqliteStore};

/// How many classes each listing shows before eliding the rest.
const LISTING_LIMIT: usize = 5;

/// Prints the integration status report. Always returns exit code 0.
pub fn run(root: &Path, db_path: &Path, mapping_path: &Path) -> i32 {
    println!("EyeKnow dataset status");

    report_config(root);
    report_database(db_path);
    report_mapping(mapping_path);

    0
}

fn report_config(root: &Path) {
    match discover(root) {
        Ok(located) => {
            println!(
                "  config:   {} ({} classes)",
                located.path.display(),
                located.config.names.len()
            );
            for (index, name) in located.config.names.iter().take(LISTING_LIMIT).enumerate() {
                println!("            {}: {}", index, name);
            }
            if located.config.names.len() > LISTING_LIMIT {
                println!(
                    "            ... {} more",
                    located.config.names.len() - LISTING_LIMIT
                );
            }
        }
        Err(DatasetError::NotFound { root }) => {
            println!("  config:   no data.yaml found under {}", root.display());
        }
        Err(e) => {
            println!("  config:   unreadable ({})", e);
        }
    }
}

fn report_database(db_path: &Path) {
    if !db_path.exists() {
        println!("  database: {} not found", db_path.display());
        return;
    }
    match SqliteStore::open(db_path).and_then(|store| store.list_custom_classes()) {
        Ok(records) => {
            println!(
                "  database: {} ({} custom classes)",
                db_path.display(),
                records.len()
            );
            for record in records.iter().take(LISTING_LIMIT) {
                println!("            {}: {}", record.class_id, record.name);
            }
            if records.len() > LISTING_LIMIT {
                println!("            ... {} more", records.len() - LISTING_LIMIT);
            }
        }
        Err(e) => {
            println!("  database: {} unreadable ({})", db_path.display(), e);
        }
    }
}

fn report_mapping(mapping_path: &Path) {
    if !mapping_path.exists() {
        println!("  mapping:  {} not written yet", mapping_path.display());
        return;
    }
    match fs::read_to_string(mapping_path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<ClassMapping>(&text).map_err(|e| e.to_string()))
    {
        Ok(mapping) => {
            println!(
                "  mapping:  {} ({} entries)",
                mapping_path.display(),
                mapping.len()
            );
        }
        Err(reason) => {
            println!("  mapping:  {} unreadable ({})", mapping_path.display(), reason);
        }
    }
}
