//! Service layer - business logic orchestration
//!
//! The controller coordinates the store, the filter engine and a view.
//! Logging and status summaries sit alongside it.

mod controller;
pub mod filter;
pub mod logging;
pub mod status;

pub use controller::ExpenseController;
pub use filter::{apply_filter, row_states};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use status::{summarize, CategorySummary, StatusSummary};
