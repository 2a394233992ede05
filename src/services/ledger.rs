//! Ledger service
//!
//! The command handlers a front end calls: add and delete transactions, set
//! the budget, search, and read back the ledger and its summary.

use crate::display::format::DisplayFormat;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, NewTransaction, Transaction, TransactionId};
use crate::storage::Storage;

use super::filter::filter_ledger;
use super::summary::AggregateSnapshot;

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
    format: DisplayFormat,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage, format: DisplayFormat) -> Self {
        Self { storage, format }
    }

    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    /// Record a new transaction; it is sorted in and persisted immediately
    pub fn add_transaction(&self, input: NewTransaction) -> LedgerResult<Transaction> {
        self.storage.transactions.add(input)
    }

    /// Delete a transaction; returns `false` if no transaction had that id
    pub fn delete_transaction(&self, id: TransactionId) -> LedgerResult<bool> {
        self.storage.transactions.delete(id)
    }

    /// Parse and store the monthly budget
    ///
    /// Invalid input, or a budget larger than [`Money::MAX`], is a validation
    /// error and leaves the stored budget as it was.
    pub fn set_budget(&self, raw: &str) -> LedgerResult<Money> {
        let amount = Money::parse(raw).map_err(|e| {
            tracing::debug!(raw, error = %e, "rejected budget input");
            LedgerError::Validation(
                "INVALID INPUT FOR BUDGET VALUE, THIS IS A REQUIRED FIELD!".into(),
            )
        })?;
        if amount.exceeds_limit() {
            return Err(LedgerError::Validation(format!(
                "Budget must not exceed {}",
                Money::MAX
            )));
        }

        self.storage.budget.set(amount)?;
        tracing::info!(%amount, "budget set");
        Ok(amount)
    }

    /// The stored budget, if one has been set
    pub fn budget(&self) -> LedgerResult<Option<Money>> {
        self.storage.budget.get()
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Transactions matching a free-text query, newest first
    pub fn search(&self, query: &str) -> LedgerResult<Vec<Transaction>> {
        let all = self.transactions()?;
        Ok(filter_ledger(&all, query, &self.format)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Current totals; fails with `BudgetNotSet` when there is no budget
    pub fn snapshot(&self) -> LedgerResult<AggregateSnapshot> {
        let transactions = self.transactions()?;
        AggregateSnapshot::compute(&transactions, self.budget()?)
    }
}
