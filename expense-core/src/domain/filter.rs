//! Transaction filters
//!
//! Filters select rows to highlight; they never remove anything.

use rust_decimal::Decimal;
use serde::Serialize;

use super::result::{Error, Result};
use super::transaction::Transaction;

/// Predicate over a single transaction
pub trait TransactionFilter {
    fn matches(&self, transaction: &Transaction) -> bool;
}

/// How an [`AmountFilter`] compares amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountMatch {
    /// amount == threshold
    Exact,
    /// amount >= threshold
    AtLeast,
}

/// Matches transactions by amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountFilter {
    threshold: Decimal,
    mode: AmountMatch,
}

impl AmountFilter {
    /// Match amounts equal to `amount`
    pub fn new(amount: Decimal) -> Result<Self> {
        Self::with_mode(amount, AmountMatch::Exact)
    }

    /// Match amounts at or above `threshold`
    pub fn at_least(threshold: Decimal) -> Result<Self> {
        Self::with_mode(threshold, AmountMatch::AtLeast)
    }

    /// Fails with `InvalidAmount` unless `threshold` is positive
    pub fn with_mode(threshold: Decimal, mode: AmountMatch) -> Result<Self> {
        if threshold <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        Ok(Self { threshold, mode })
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    pub fn mode(&self) -> AmountMatch {
        self.mode
    }
}

impl TransactionFilter for AmountFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        match self.mode {
            AmountMatch::AtLeast => transaction.amount() >= self.threshold,
            AmountMatch::Exact => transaction.amount() == self.threshold,
        }
    }
}

/// Matches transactions with exactly this category (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Result<Self> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(Error::InvalidCategory);
        }
        Ok(Self { category })
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl TransactionFilter for CategoryFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.category() == self.category
    }
}

/// Any supported filter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Filter {
    Amount(AmountFilter),
    Category(CategoryFilter),
}

impl TransactionFilter for Filter {
    fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Filter::Amount(f) => f.matches(transaction),
            Filter::Category(f) => f.matches(transaction),
        }
    }
}

impl From<AmountFilter> for Filter {
    fn from(f: AmountFilter) -> Self {
        Filter::Amount(f)
    }
}

impl From<CategoryFilter> for Filter {
    fn from(f: CategoryFilter) -> Self {
        Filter::Category(f)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Amount(a) => match a.mode {
                AmountMatch::AtLeast => write!(f, "amount >= {:.2}", a.threshold),
                AmountMatch::Exact => write!(f, "amount = {:.2}", a.threshold),
            },
            Filter::Category(c) => write!(f, "category = {}", c.category),
        }
    }
}
