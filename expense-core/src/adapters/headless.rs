//! Headless view - keeps the last rendered table in memory
//!
//! Useful for embedding the controller without a terminal, and for tests.

use rust_decimal::Decimal;

use crate::domain::Transaction;
use crate::ports::TransactionView;

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessRow {
    pub amount: Decimal,
    pub category: String,
    pub timestamp: String,
    pub highlighted: bool,
}

/// View that records what it was told to show
#[derive(Debug, Default)]
pub struct HeadlessView {
    rows: Vec<HeadlessRow>,
    refresh_count: usize,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[HeadlessRow] {
        &self.rows
    }

    /// Highlight flag per row
    pub fn highlighted(&self) -> Vec<bool> {
        self.rows.iter().map(|r| r.highlighted).collect()
    }

    /// Number of full redraws so far
    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }
}

impl TransactionView for HeadlessView {
    fn refresh(&mut self, transactions: &[Transaction]) {
        self.rows = transactions
            .iter()
            .map(|t| HeadlessRow {
                amount: t.amount(),
                category: t.category().to_string(),
                timestamp: t.timestamp(),
                highlighted: false,
            })
            .collect();
        self.refresh_count += 1;
    }

    fn highlight_rows(&mut self, rows: &[bool]) {
        // Flags past the end of the table are ignored; missing flags mean normal
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.highlighted = rows.get(i).copied().unwrap_or(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_resets_highlights() {
        let txs = vec![
            Transaction::new(Decimal::new(100, 2), "food").unwrap(),
            Transaction::new(Decimal::new(200, 2), "bills").unwrap(),
        ];
        let mut view = HeadlessView::new();
        view.refresh(&txs);
        view.highlight_rows(&[true, false]);
        assert_eq!(view.highlighted(), vec![true, false]);

        view.refresh(&txs);
        assert_eq!(view.highlighted(), vec![false, false]);
        assert_eq!(view.refresh_count(), 2);
    }

    #[test]
    fn test_short_flag_list() {
        let txs = vec![
            Transaction::new(Decimal::ONE, "food").unwrap(),
            Transaction::new(Decimal::ONE, "food").unwrap(),
        ];
        let mut view = HeadlessView::new();
        view.refresh(&txs);
        view.highlight_rows(&[true]);
        assert_eq!(view.highlighted(), vec![true, false]);
    }
}
