//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external collaborators. The controller
//! depends only on these traits, not on any concrete front end.

mod view;

pub use view::TransactionView;
