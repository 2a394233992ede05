//! Storage layer for the expense ledger
//!
//! A small key-value store on disk: one JSON file per key
//! (`transactions`, `budget`), each rewritten atomically.

pub mod budget;
pub mod file_io;
pub mod transactions;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), LedgerError> {
        self.transactions.load()?;
        self.budget.load()?;
        Ok(())
    }
}
