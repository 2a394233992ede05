//! Budget repository for JSON storage
//!
//! The monthly budget lives in budget.json, independently of the ledger:
//! `{"budget": "2000"}`. The value is kept as a decimal string.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<String>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budget: RwLock<Option<String>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budget: RwLock::new(None),
        }
    }

    /// Load the budget from disk; an unreadable file counts as unset
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: BudgetData = read_json(&self.path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored budget is unreadable, treating as unset");
            BudgetData::default()
        });

        *self.write_lock()? = file_data.budget;
        Ok(())
    }

    /// Save the budget to disk
    pub fn save(&self) -> LedgerResult<()> {
        let file_data = BudgetData {
            budget: self.read_lock()?.clone(),
        };
        write_json_atomic(&self.path, &file_data).map_err(|e| {
            tracing::error!(error = %e, "failed to persist budget");
            e
        })
    }

    /// The stored budget, or `None` if it has never been set
    ///
    /// A stored value that does not parse counts as zero.
    pub fn get(&self) -> LedgerResult<Option<Money>> {
        let stored = self.read_lock()?;
        Ok(stored.as_deref().map(|raw| {
            Money::parse(raw).unwrap_or_else(|e| {
                tracing::warn!(raw, error = %e, "stored budget does not parse, using zero");
                Money::zero()
            })
        }))
    }

    /// Store a new budget and persist it
    pub fn set(&self, amount: Money) -> LedgerResult<()> {
        *self.write_lock()? = Some(amount.to_decimal_string());
        self.save()
    }

    fn read_lock(&self) -> LedgerResult<std::sync::RwLockReadGuard<'_, Option<String>>> {
        self.budget
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> LedgerResult<std::sync::RwLockWriteGuard<'_, Option<String>>> {
        self.budget
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
