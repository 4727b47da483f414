//! Expense controller - mediates between user actions, the store and the view

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{AllowedCategories, Filter, Transaction, TransactionStore};
use crate::ports::TransactionView;

use super::filter::row_states;

/// Controller for one tracking session
///
/// Owns the store and the view. Every operation runs to completion and
/// reports failure through its return value; errors never reach the view.
pub struct ExpenseController<V: TransactionView> {
    model: TransactionStore,
    view: V,
    categories: AllowedCategories,
    current_filter: Option<Filter>,
}

impl<V: TransactionView> ExpenseController<V> {
    /// Create a controller using the default categories
    pub fn new(view: V) -> Self {
        Self::with_categories(view, AllowedCategories::default())
    }

    pub fn with_categories(view: V, categories: AllowedCategories) -> Self {
        Self {
            model: TransactionStore::new(),
            view,
            categories,
            current_filter: None,
        }
    }

    /// Validate and record a transaction
    ///
    /// Returns `false` and leaves the store and view untouched if the input
    /// is invalid. Use [`Self::try_add_transaction`] to learn why.
    pub fn add_transaction(&mut self, amount: Decimal, category: &str) -> bool {
        self.try_add_transaction(amount, category).is_ok()
    }

    /// Like [`Self::add_transaction`] but reports the validation error
    ///
    /// An amount that would push the session total past `Decimal::MAX` is
    /// rejected as `InvalidAmount`.
    pub fn try_add_transaction(&mut self, amount: Decimal, category: &str) -> Result<()> {
        let transaction = Transaction::with_categories(amount, category, &self.categories)?;
        self.model
            .checked_total()
            .and_then(|total| total.checked_add(transaction.amount()))
            .ok_or(Error::InvalidAmount)?;
        self.model.add(transaction);
        self.refresh();
        Ok(())
    }

    /// Replace the current filter. Nothing is recomputed until [`Self::apply_filter`].
    pub fn set_filter(&mut self, filter: impl Into<Filter>) {
        self.current_filter = Some(filter.into());
    }

    /// Drop the current filter and show every row as normal
    pub fn clear_filter(&mut self) {
        self.current_filter = None;
        self.apply_filter();
    }

    /// Mark the rows matching the current filter in the view
    pub fn apply_filter(&mut self) {
        let states = row_states(self.model.transactions(), self.current_filter.as_ref());
        self.view.highlight_rows(&states);
    }

    /// Remove the transaction shown at `row` (0-based)
    ///
    /// Returns `false` with no change when the store is empty or the row
    /// doesn't exist.
    pub fn remove_selected_transaction(&mut self, row: usize) -> bool {
        self.try_remove_selected_transaction(row).is_ok()
    }

    /// Like [`Self::remove_selected_transaction`] but returns the removed
    /// transaction or the range error
    pub fn try_remove_selected_transaction(&mut self, row: usize) -> Result<Transaction> {
        let removed = self.model.remove_at(row)?;
        self.refresh();
        Ok(removed)
    }

    /// Redraw the full table
    pub fn refresh(&mut self) {
        self.view.refresh(self.model.transactions());
    }

    pub fn model(&self) -> &TransactionStore {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn categories(&self) -> &AllowedCategories {
        &self.categories
    }

    pub fn current_filter(&self) -> Option<&Filter> {
        self.current_filter.as_ref()
    }
}
