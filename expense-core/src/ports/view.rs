//! Presentation port - what the controller asks of a front end

use crate::domain::Transaction;

/// A front end that renders the transaction table
///
/// Implementations decide how rows look; the controller only tells them
/// which rows exist and which of them match the current filter.
pub trait TransactionView {
    /// Redraw the whole table. Every row goes back to the normal style.
    fn refresh(&mut self, transactions: &[Transaction]);

    /// Mark matched rows. `rows` has one flag per row, in table order.
    fn highlight_rows(&mut self, rows: &[bool]);
}
