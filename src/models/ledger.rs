//! The ledger: an ordered collection of transactions
//!
//! Pure in-memory operations. Persisting the ledger is the job of
//! `storage::TransactionRepository`.

use super::ids::TransactionId;
use crate::error::{LedgerError, LedgerResult};
use super::transaction::{NewTransaction, Transaction};

/// Ordered sequence of transactions, newest first once sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-stored transactions, keeping their order
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The id the next added transaction will receive
    ///
    /// One past the highest id in use, so ids never repeat after a delete.
    /// For a ledger that never had deletions this is `len + 1`.
    pub fn next_id(&self) -> LedgerResult<TransactionId> {
        match self.transactions.iter().map(|t| t.id).max() {
            None => Ok(TransactionId::new(1)),
            Some(highest) => highest.next().ok_or_else(|| {
                LedgerError::Overflow(format!("no transaction id after #{}", highest))
            }),
        }
    }

    /// Append a transaction with the next id. Does not re-sort.
    pub fn push(&mut self, input: NewTransaction) -> LedgerResult<&Transaction> {
        let txn = Transaction::from_new(self.next_id()?, input);
        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Remove the first transaction with the given id
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Sort by date, newest first. Equal dates keep their relative order.
    pub fn sort_newest_first(&mut self) {
        self.transactions.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Check the newest-first ordering invariant
    pub fn is_sorted_newest_first(&self) -> bool {
        self.transactions.windows(2).all(|w| w[0].date >= w[1].date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn input(name: &str, date: NaiveDateTime) -> NewTransaction {
        NewTransaction {
            name: name.into(),
            amount: Money::from_cents(100),
            date,
            source: String::new(),
            recipient: String::new(),
            kind: TransactionType::Expense,
        }
    }

    fn names(ledger: &Ledger) -> Vec<&str> {
        ledger.transactions().iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_ids_count_up_from_one() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.next_id().unwrap(), TransactionId::new(1));

        assert_eq!(ledger.push(input("a", day(1))).unwrap().id, TransactionId::new(1));
        assert_eq!(ledger.push(input("b", day(2))).unwrap().id, TransactionId::new(2));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_ids_do_not_collide_after_delete() {
        let mut ledger = Ledger::new();
        ledger.push(input("a", day(1))).unwrap();
        ledger.push(input("b", day(2))).unwrap();
        ledger.remove(TransactionId::new(1));

        let id = ledger.push(input("c", day(3))).unwrap().id;
        assert_eq!(id, TransactionId::new(3));
        assert_eq!(names(&ledger), vec!["b", "c"]);
    }

    #[test]
    fn test_exhausted_ids_are_an_error() {
        let last = Transaction::from_new(TransactionId::new(u64::MAX), input("last", day(1)));
        let mut ledger = Ledger::from_transactions(vec![last]);

        assert!(matches!(ledger.next_id(), Err(LedgerError::Overflow(_))));
        assert!(ledger.push(input("next", day(2))).is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut ledger = Ledger::new();
        ledger.push(input("a", day(1))).unwrap();

        assert!(ledger.remove(TransactionId::new(9)).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_sort_is_newest_first_and_stable() {
        let mut ledger = Ledger::new();
        ledger.push(input("old", day(1))).unwrap();
        ledger.push(input("tie-1", day(5))).unwrap();
        ledger.push(input("new", day(9))).unwrap();
        ledger.push(input("tie-2", day(5))).unwrap();
        ledger.push(input("tie-3", day(5))).unwrap();

        ledger.sort_newest_first();

        assert_eq!(names(&ledger), vec!["new", "tie-1", "tie-2", "tie-3", "old"]);
        assert!(ledger.is_sorted_newest_first());
    }

    #[test]
    fn test_sort_many_interleaved_adds() {
        let mut ledger = Ledger::new();
        for i in 0..30u32 {
            ledger
                .push(input(&format!("t{}", i), day(1 + (i * 7) % 28)))
                .unwrap();
            ledger.sort_newest_first();
            assert!(ledger.is_sorted_newest_first());
        }

        // Equal dates keep insertion order (ascending id within a date)
        for pair in ledger.transactions().windows(2) {
            if pair[0].date == pair[1].date {
                assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
