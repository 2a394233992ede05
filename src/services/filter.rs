//! Free-text search over the ledger
//!
//! A transaction matches when the rendered text of any of its displayed
//! fields contains the query, ignoring case.

use crate::display::format::DisplayFormat;
use crate::models::Transaction;

/// Check whether a transaction matches a search query
///
/// The empty query matches everything.
pub fn matches(txn: &Transaction, query: &str, format: &DisplayFormat) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }

    let fields = [
        txn.name.clone(),
        format.transaction_amount(txn),
        txn.source.clone(),
        txn.recipient.clone(),
        format.datetime(&txn.date),
    ];

    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// The matching transactions, in ledger order
pub fn filter_ledger<'a>(
    transactions: &'a [Transaction],
    query: &str,
    format: &DisplayFormat,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|txn| matches(txn, query, format))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionType};
    use chrono::NaiveDate;

    fn txn(
        id: u64,
        name: &str,
        cents: i64,
        kind: TransactionType,
        source: &str,
        recipient: &str,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            name: name.into(),
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(18, 45, 0)
                .unwrap(),
            source: source.into(),
            recipient: recipient.into(),
            kind,
        }
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            txn(3, "Groceries", 4_599, TransactionType::Expense, "Credit Card", "SuperMart"),
            txn(2, "Salary", 500_000, TransactionType::Income, "Bank", "Me"),
            txn(1, "Rent", 120_000, TransactionType::Expense, "UPI", "Landlord"),
        ]
    }

    fn ids(found: &[&Transaction]) -> Vec<u64> {
        found.iter().map(|t| t.id.value()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let ledger = ledger();
        let found = filter_ledger(&ledger, "", &DisplayFormat::default());
        assert_eq!(ids(&found), vec![3, 2, 1]);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let ledger = ledger();
        let found = filter_ledger(&ledger, "SALARY", &DisplayFormat::default());
        assert_eq!(ids(&found), vec![2]);
    }

    #[test]
    fn test_matches_source_and_recipient() {
        let ledger = ledger();
        let fmt = DisplayFormat::default();
        assert_eq!(ids(&filter_ledger(&ledger, "credit", &fmt)), vec![3]);
        assert_eq!(ids(&filter_ledger(&ledger, "landlord", &fmt)), vec![1]);
    }

    #[test]
    fn test_matches_rendered_amount() {
        let ledger = ledger();
        let fmt = DisplayFormat::default();
        assert_eq!(ids(&filter_ledger(&ledger, "1,200", &fmt)), vec![1]);
        // Expenses render with a minus sign, income with a plus sign
        assert_eq!(ids(&filter_ledger(&ledger, "+₹", &fmt)), vec![2]);
        assert_eq!(ids(&filter_ledger(&ledger, "-₹", &fmt)), vec![3, 1]);
    }

    #[test]
    fn test_matches_rendered_date() {
        let ledger = ledger();
        let fmt = DisplayFormat::default();
        assert_eq!(ids(&filter_ledger(&ledger, "3/15/2024", &fmt)), vec![3, 2, 1]);
        assert_eq!(ids(&filter_ledger(&ledger, "6:45:00 pm", &fmt)), vec![3, 2, 1]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let ledger = ledger();
        assert!(filter_ledger(&ledger, "holiday", &DisplayFormat::default()).is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let ledger = ledger();
        let before = ledger.clone();
        let _ = filter_ledger(&ledger, "rent", &DisplayFormat::default());
        assert_eq!(ledger, before);
    }
}
