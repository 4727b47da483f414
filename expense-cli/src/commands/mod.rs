//! CLI command implementations

pub mod categories;
pub mod logs;
pub mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use expense_core::{EntryPoint, ExpenseContext, LogEvent, LoggingService};

/// Env var that points the CLI at a different data directory
const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from the environment or the default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".expense-tracker"))
        .context("Could not find home directory; set EXPENSE_TRACKER_DIR")
}

/// Load settings and build the session context
pub fn get_context() -> Result<ExpenseContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    ExpenseContext::new(&data_dir).context("Failed to initialize expense tracker")
}
