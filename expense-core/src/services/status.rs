//! Status - totals for the current session

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::TransactionStore;

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_transactions: usize,
    pub total_amount: Decimal,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub total: Decimal,
}

/// Summarize the store; categories appear in the order first seen
pub fn summarize(store: &TransactionStore) -> StatusSummary {
    let mut categories: Vec<CategorySummary> = Vec::new();

    for tx in store.transactions() {
        match categories.iter_mut().find(|c| c.category == tx.category()) {
            Some(entry) => {
                entry.count += 1;
                entry.total = entry.total.saturating_add(tx.amount());
            }
            None => categories.push(CategorySummary {
                category: tx.category().to_string(),
                count: 1,
                total: tx.amount(),
            }),
        }
    }

    StatusSummary {
        total_transactions: store.len(),
        total_amount: store.total_amount(),
        categories,
    }
}
