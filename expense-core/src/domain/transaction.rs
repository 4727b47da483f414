//! Transaction domain model

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::category::AllowedCategories;
use super::result::{Error, Result};

/// Pattern used for the human-readable transaction timestamp
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Format a timestamp the way transactions display it
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a string produced by [`format_timestamp`]
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| Error::Timestamp(format!("{value:?}: {e}")))
}

/// A single expense
///
/// Fields are private: a `Transaction` can only be obtained through the
/// validating constructors, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    id: Uuid,
    amount: Decimal,
    category: String,
    created_at: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction, validating against the default categories
    pub fn new(amount: Decimal, category: &str) -> Result<Self> {
        Self::with_categories(amount, category, &AllowedCategories::default())
    }

    /// Create a transaction, validating against an explicit category set
    ///
    /// The amount is checked first, so input that is wrong on both counts
    /// reports `InvalidAmount`.
    pub fn with_categories(
        amount: Decimal,
        category: &str,
        allowed: &AllowedCategories,
    ) -> Result<Self> {
        if !is_valid_amount(amount) {
            return Err(Error::InvalidAmount);
        }
        if !is_valid_category(category, allowed) {
            return Err(Error::InvalidCategory);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            category: category.to_string(),
            created_at: Local::now().naive_local(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Local time the transaction was created
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Creation time formatted with [`TIMESTAMP_FORMAT`]
    pub fn timestamp(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

pub fn is_valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

pub fn is_valid_category(category: &str, allowed: &AllowedCategories) -> bool {
    !category.trim().is_empty() && allowed.contains(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let tx = Transaction::new(Decimal::new(5000, 2), "food").unwrap();
        assert_eq!(tx.amount(), Decimal::new(5000, 2));
        assert_eq!(tx.category(), "food");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let tx = Transaction::new(Decimal::new(1250, 2), "bills").unwrap();
        let parsed = parse_timestamp(&tx.timestamp()).unwrap();
        let now = Local::now().naive_local();

        assert!(parsed <= tx.created_at());
        assert!((now - parsed).num_seconds() < 60);
    }

    #[test]
    fn test_invalid_amount_checked_first() {
        let err = Transaction::new(Decimal::new(-50, 0), "xyz").unwrap_err();
        assert!(matches!(err, Error::InvalidAmount));
        assert_eq!(err.to_string(), "The amount is not valid.");
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert!(matches!(
            Transaction::new(Decimal::ZERO, "food"),
            Err(Error::InvalidAmount)
        ));
    }

    #[test]
    fn test_invalid_category() {
        for category in ["", "   ", "xyz", "Food"] {
            let err = Transaction::new(Decimal::ONE, category).unwrap_err();
            assert!(matches!(err, Error::InvalidCategory), "{category:?}");
            assert_eq!(err.to_string(), "The category is not valid.");
        }
    }

    #[test]
    fn test_custom_categories() {
        let allowed = AllowedCategories::new(["rent"]);
        assert!(Transaction::with_categories(Decimal::ONE, "rent", &allowed).is_ok());
        assert!(Transaction::with_categories(Decimal::ONE, "food", &allowed).is_err());
    }

    #[test]
    fn test_identical_inputs_get_distinct_ids() {
        let a = Transaction::new(Decimal::ONE, "other").unwrap();
        let b = Transaction::new(Decimal::ONE, "other").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(parse_timestamp("yesterday"), Err(Error::Timestamp(_))));
    }
}
