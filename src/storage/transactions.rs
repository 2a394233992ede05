//! Transaction repository for JSON storage
//!
//! Manages loading and saving the ledger to transactions.json. The file is a
//! plain JSON array of transaction objects, rewritten in full on every save.

use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, NewTransaction, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
pub struct TransactionRepository {
    path: PathBuf,
    ledger: RwLock<Ledger>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ledger: RwLock::new(Ledger::new()),
        }
    }

    /// Load the ledger from disk
    ///
    /// A missing or unreadable file gives an empty ledger. Individual
    /// records that cannot be parsed are skipped.
    pub fn load(&self) -> LedgerResult<()> {
        let loaded = match read_json::<Value, _>(&self.path) {
            Ok(value) => ledger_from_value(value),
            Err(e) => {
                tracing::warn!(error = %e, "stored ledger is unreadable, starting empty");
                Ledger::new()
            }
        };
        tracing::debug!(count = loaded.len(), path = %self.path.display(), "ledger loaded");

        let mut ledger = self.write_lock()?;
        *ledger = loaded;
        ledger.sort_newest_first();
        Ok(())
    }

    /// Write the whole ledger to disk
    pub fn save(&self) -> LedgerResult<()> {
        let ledger = self.read_lock()?;
        write_json_atomic(&self.path, &ledger.transactions()).map_err(|e| {
            tracing::error!(error = %e, "failed to persist ledger");
            e
        })
    }

    /// Sort newest first, then persist
    pub fn sort_and_persist(&self) -> LedgerResult<()> {
        self.write_lock()?.sort_newest_first();
        self.save()
    }

    /// Add a transaction with the next id, then sort and persist
    ///
    /// If persisting fails the transaction stays in memory and the write
    /// error is returned.
    pub fn add(&self, input: NewTransaction) -> LedgerResult<Transaction> {
        let txn = {
            let mut ledger = self.write_lock()?;
            ledger.push(input)?.clone()
        };
        tracing::info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction added");

        self.sort_and_persist()?;
        Ok(txn)
    }

    /// Delete the first transaction with the given id, then persist
    ///
    /// Returns `false` when nothing matched; that is not an error.
    pub fn delete(&self, id: TransactionId) -> LedgerResult<bool> {
        let removed = self.write_lock()?.remove(id);
        match &removed {
            Some(txn) => tracing::info!(id = %txn.id, "transaction deleted"),
            None => tracing::debug!(%id, "no transaction to delete"),
        }

        self.save()?;
        Ok(removed.is_some())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> LedgerResult<Vec<Transaction>> {
        Ok(self.read_lock()?.transactions().to_vec())
    }

    /// Count transactions
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.read_lock()?.len())
    }

    fn read_lock(&self) -> LedgerResult<std::sync::RwLockReadGuard<'_, Ledger>> {
        self.ledger
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> LedgerResult<std::sync::RwLockWriteGuard<'_, Ledger>> {
        self.ledger
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

fn ledger_from_value(value: Value) -> Ledger {
    let records = match value {
        Value::Null => return Ledger::new(),
        Value::Array(records) => records,
        other => {
            tracing::warn!(
                found = %json_kind(&other),
                "stored ledger is not an array, starting empty"
            );
            return Ledger::new();
        }
    };

    let transactions = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Transaction>(record) {
            Ok(txn) => Some(txn),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable stored transaction");
                None
            }
        })
        .collect();

    Ledger::from_transactions(transactions)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
