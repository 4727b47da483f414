//! Expense Core - business logic for a personal expense tracker
//!
//! Laid out hexagonally:
//!
//! - **domain**: transactions, category whitelist, filters, the in-memory store
//! - **ports**: the presentation contract (`TransactionView`)
//! - **services**: the controller, filter engine, status summaries, event log
//! - **adapters**: views that ship with the core (`HeadlessView`)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
mod log_migrations;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use config::Config;
use domain::AllowedCategories;

pub use adapters::HeadlessView;
pub use domain::result::Error;
pub use domain::{
    AmountFilter, AmountMatch, CategoryFilter, Filter, Transaction, TransactionFilter, TransactionStore,
};
pub use ports::TransactionView;
pub use services::{EntryPoint, ExpenseController, LogEvent, LoggingService};

/// Main context for a tracking session
///
/// Holds the loaded configuration and hands out controllers wired to it.
pub struct ExpenseContext {
    pub config: Config,
    pub data_dir: PathBuf,
    categories: AllowedCategories,
}

impl ExpenseContext {
    /// Load configuration from `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)
            .with_context(|| format!("Failed to load settings from {:?}", data_dir))?;
        let categories = config.allowed_categories()?;

        Ok(Self {
            config,
            data_dir: data_dir.to_path_buf(),
            categories,
        })
    }

    pub fn categories(&self) -> &AllowedCategories {
        &self.categories
    }

    /// Create a controller for `view` using the configured categories
    pub fn controller<V: TransactionView>(&self, view: V) -> ExpenseController<V> {
        ExpenseController::with_categories(view, self.categories.clone())
    }
}
