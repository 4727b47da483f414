//! In-memory transaction store (the model)

use rust_decimal::Decimal;

use super::result::{Error, Result};
use super::transaction::Transaction;

/// Ordered collection of validated transactions
///
/// Insertion order is kept and nothing is deduplicated. The store owns its
/// transactions; callers only ever see them through a shared slice.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Remove the first entry with the same identity as `transaction`
    ///
    /// Returns `None` when it isn't in the store.
    pub fn remove(&mut self, transaction: &Transaction) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id() == transaction.id())?;
        Some(self.transactions.remove(index))
    }

    /// Remove the transaction at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Transaction> {
        if index >= self.transactions.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        Ok(self.transactions.remove(index))
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all amounts (zero when empty)
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn total_amount(&self) -> Decimal {
        self.transactions
            .iter()
            .fold(Decimal::ZERO, |total, t| total.saturating_add(t.amount()))
    }

    /// Sum of all amounts, or `None` if it doesn't fit in a `Decimal`
    pub fn checked_total(&self) -> Option<Decimal> {
        self.transactions
            .iter()
            .try_fold(Decimal::ZERO, |total, t| total.checked_add(t.amount()))
    }
}
