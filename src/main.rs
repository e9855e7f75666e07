//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `labels_dump` library that handles:
//! - Logger initialization
//! - User-facing output formatting
//! - Exit codes
//!
//! The binary takes no arguments: it always reads the LabelPilot client
//! database from its fixed location and writes `labels_db_dump.json` to the
//! current directory. All core functionality is implemented in the library.

use anyhow::{Context, Result};
use std::process;

use labels_dump::initialization::init_logger_with;
use labels_dump::{export_labels, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::default();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match export_labels(&config.export_options()).await {
        Ok(report) => {
            println!(
                "Successfully dumped {} labels to {}",
                report.exported,
                report.output.display()
            );
            Ok(())
        }
        Err(e) => {
            // Only a missing database changes the exit status; every other
            // failure is reported and the process ends normally.
            println!("{e}");
            match e.exit_code() {
                0 => Ok(()),
                code => process::exit(code),
            }
        }
    }
}
