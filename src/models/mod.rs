//! Core data models for the expense ledger
//!
//! This module contains the data structures of the domain: money amounts,
//! transactions and the ledger that owns them.

pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL};
pub use transaction::{parse_datetime, NewTransaction, Transaction, TransactionType};
