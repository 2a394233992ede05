//! Service layer for the expense ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! summary figures, search, and the command handlers that tie them together.

pub mod filter;
pub mod ledger;
pub mod summary;

pub use filter::{filter_ledger, matches};
pub use ledger::LedgerService;
pub use summary::{
    compute_balance, compute_budget_remaining, compute_totals, AggregateSnapshot, Totals,
};
