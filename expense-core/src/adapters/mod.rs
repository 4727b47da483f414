//! Adapter implementations
//!
//! Concrete implementations of the port traits that ship with the core.

pub mod headless;

pub use headless::HeadlessView;
