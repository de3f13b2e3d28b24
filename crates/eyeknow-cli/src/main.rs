//! EyeKnow class sync CLI.
//!
//! Provides the `eyeknow` binary with subcommands for keeping the `objects`
//! database and the class mapping file in step with a dataset description:
//!
//! - `sync` locates `data.yaml` under a dataset folder, rewrites the custom
//!   partition of the database, and emits the class mapping JSON.
//! - `status` reports the current dataset, database, and mapping state
//!   without changing anything.
//!
//! Default locations come from `EYEKNOW_DB_PATH` and `EYEKNOW_MAPPING_PATH`
//! when the flags are omitted.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use eyeknow_dataset::DatasetError;
use eyeknow_storage::SqliteStore;

mod pipeline;
mod status;

use pipeline::{PipelineError, PipelineReport};

/// EyeKnow dataset class synchronization tools.
#[derive(Parser)]
#[command(name = "eyeknow", about = "EyeKnow dataset class synchronization tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Synchronize the objects database and class mapping from a dataset folder.
    Sync {
        /// Dataset folder to search for data.yaml (prompted for when omitted).
        root: Option<PathBuf>,

        /// Path to the objects database file.
        #[arg(long)]
        db: Option<PathBuf>,

        /// Path the class mapping JSON is written to.
        #[arg(long)]
        mapping: Option<PathBuf>,
    },

    /// Report the current dataset, database, and mapping state.
    Status {
        /// Dataset folder to search for data.yaml (default: current directory).
        root: Option<PathBuf>,

        /// Path to the objects database file.
        #[arg(long)]
        db: Option<PathBuf>,

        /// Path of the class mapping JSON.
        #[arg(long)]
        mapping: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { root, db, mapping } => {
            let db_path = db.unwrap_or_else(default_db_path);
            let mapping_path = mapping.unwrap_or_else(default_mapping_path);
            process::exit(run_sync(root, db_path, mapping_path));
        }
        Commands::Status { root, db, mapping } => {
            let root = root.unwrap_or_else(|| PathBuf::from("."));
            let db_path = db.unwrap_or_else(default_db_path);
            let mapping_path = mapping.unwrap_or_else(default_mapping_path);
            process::exit(status::run(&root, &db_path, &mapping_path));
        }
    }
}

/// Database location: `--db`, else `EYEKNOW_DB_PATH`, else the fixed default.
fn default_db_path() -> PathBuf {
    std::env::var("EYEKNOW_DB_PATH")
        .unwrap_or_else(|_| "eyeknow_objects.db".to_string())
        .into()
}

/// Mapping location: `--mapping`, else `EYEKNOW_MAPPING_PATH`, else the
/// fixed default.
fn default_mapping_path() -> PathBuf {
    std::env::var("EYEKNOW_MAPPING_PATH")
        .unwrap_or_else(|_| "custom_class_mapping.json".to_string())
        .into()
}

/// Execute the sync subcommand.
///
/// Returns exit code: 0 = success (or no data.yaml found), 1 = invalid root
/// or malformed/incomplete config, 2 = storage failure, 3 = mapping write
/// failure.
fn run_sync(root: Option<PathBuf>, db_path: PathBuf, mapping_path: PathBuf) -> i32 {
    let root = match root {
        Some(root) => root,
        None => match prompt_for_root() {
            Ok(root) => root,
            Err(e) => {
                eprintln!("Error: failed to read dataset folder path: {}", e);
                return 1;
            }
        },
    };

    if !root.exists() {
        eprintln!("Error: dataset folder does not exist: {}", root.display());
        return 1;
    }
    println!("Using dataset folder: {}", root.display());

    match pipeline::run(&root, || SqliteStore::open(&db_path), &mapping_path) {
        Ok(report) => {
            print_report(&report, &mapping_path);
            0
        }
        Err(PipelineError::Dataset(DatasetError::NotFound { root })) => {
            println!(
                "No data.yaml found under {}; nothing to sync.",
                root.display()
            );
            0
        }
        Err(PipelineError::Dataset(e)) => {
            eprintln!("Error: {}", e);
            1
        }
        Err(e @ PipelineError::Storage(_)) | Err(e @ PipelineError::Mapping(_)) => {
            eprintln!("Error: {}", e);
            2
        }
        Err(e @ PipelineError::Serialize(_)) => {
            eprintln!("Error: {}", e);
            3
        }
        Err(e @ PipelineError::MappingWrite { .. }) => {
            eprintln!("Error: {}", e);
            eprintln!("The database was already updated; the mapping file on disk is stale.");
            3
        }
    }
}

/// Asks for the dataset folder on stdin when no argument was given.
fn prompt_for_root() -> io::Result<PathBuf> {
    print!("Dataset folder path: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Prints the post-run status lines: config findings, the confirmed class
/// listing, and the success summary.
fn print_report(report: &PipelineReport, mapping_path: &std::path::Path) {
    println!("Found dataset config: {}", report.config_path.display());
    println!(
        "  path:    {}",
        report.config.path.as_deref().unwrap_or("(not specified)")
    );
    match report.config.nc {
        Some(nc) => println!("  classes: {}", nc),
        None => println!("  classes: (not specified)"),
    }
    println!("  names:   {} label(s)", report.config.names.len());

    if let Some((declared, actual)) = report.config.nc_mismatch() {
        println!(
            "Warning: config declares nc = {} but lists {} names; using the names.",
            declared, actual
        );
    }

    println!("Synchronized {} custom class(es):", report.records.len());
    for record in &report.records {
        println!("  {}: {}", record.class_id, record.name);
    }

    println!(
        "Wrote class mapping to {} ({} entries)",
        mapping_path.display(),
        report.mapping.len()
    );
}
