//! Filter engine - selects which rows a filter matches

use crate::domain::{Filter, Transaction, TransactionFilter};

/// Lazily yield the transactions matched by `filter`, in store order
pub fn apply_filter<'a, F>(
    filter: &'a F,
    transactions: &'a [Transaction],
) -> impl Iterator<Item = &'a Transaction> + 'a
where
    F: TransactionFilter + ?Sized,
{
    transactions.iter().filter(move |t| filter.matches(t))
}

/// One match flag per row; all `false` without a filter
pub fn row_states(transactions: &[Transaction], filter: Option<&Filter>) -> Vec<bool> {
    match filter {
        Some(f) => transactions.iter().map(|t| f.matches(t)).collect(),
        None => vec![false; transactions.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AmountFilter, CategoryFilter};
    use rust_decimal::Decimal;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(Decimal::new(3000, 2), "food").unwrap(),
            Transaction::new(Decimal::new(6000, 2), "bills").unwrap(),
            Transaction::new(Decimal::new(1000, 2), "food").unwrap(),
        ]
    }

    #[test]
    fn test_apply_filter_preserves_order() {
        let txs = sample();
        let filter = CategoryFilter::new("food").unwrap();
        let matched: Vec<_> = apply_filter(&filter, &txs).map(|t| t.amount()).collect();
        assert_eq!(matched, vec![Decimal::new(3000, 2), Decimal::new(1000, 2)]);
    }

    #[test]
    fn test_apply_filter_is_repeatable() {
        let txs = sample();
        let filter: Filter = AmountFilter::at_least(Decimal::new(2000, 2)).unwrap().into();
        assert_eq!(apply_filter(&filter, &txs).count(), 2);
        assert_eq!(apply_filter(&filter, &txs).count(), 2);
        assert_eq!(txs.len(), 3);
    }

    #[test]
    fn test_row_states() {
        let txs = sample();
        let filter: Filter = CategoryFilter::new("bills").unwrap().into();
        assert_eq!(row_states(&txs, Some(&filter)), vec![false, true, false]);
        assert_eq!(row_states(&txs, None), vec![false, false, false]);
        assert!(row_states(&[], Some(&filter)).is_empty());
    }
}
