//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O.

mod category;
mod filter;
mod store;
mod transaction;
pub mod result;

pub use category::{AllowedCategories, DEFAULT_CATEGORIES};
pub use filter::{AmountFilter, AmountMatch, CategoryFilter, Filter, TransactionFilter};
pub use store::TransactionStore;
pub use transaction::{
    format_timestamp, is_valid_amount, is_valid_category, parse_timestamp, Transaction,
    TIMESTAMP_FORMAT,
};
