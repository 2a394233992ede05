//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Unparseable amount, budget or date input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A total no longer fits the money type
    #[error("Amount out of range: {0}")]
    Overflow(String),

    /// Aggregates that need a budget were requested before one was set
    #[error("Please set the monthly budget value!")]
    BudgetNotSet,

    /// Stored data could not be read or parsed
    #[error("Failed to read stored data: {0}")]
    PersistenceRead(String),

    /// Stored data could not be written; in-memory state is not durable
    #[error("Failed to persist data: {0}")]
    PersistenceWrite(String),

    /// In-memory storage errors (poisoned locks)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means the budget has never been set
    pub fn is_budget_not_set(&self) -> bool {
        matches!(self, Self::BudgetNotSet)
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_budget_not_set_message() {
        let err = LedgerError::BudgetNotSet;
        assert_eq!(err.to_string(), "Please set the monthly budget value!");
        assert!(err.is_budget_not_set());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error() {
        let err = LedgerError::Validation("bad amount".into());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: bad amount");
    }

    #[test]
    fn test_overflow_error() {
        let err = LedgerError::Overflow("income total".into());
        assert_eq!(err.to_string(), "Amount out of range: income total");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
