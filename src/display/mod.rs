//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display:
//! amounts, dates, the transaction table and the summary panel.

pub mod format;
pub mod summary;
pub mod transaction;

pub use format::DisplayFormat;
pub use summary::{format_budget, format_summary, FormattedSnapshot};
pub use transaction::{format_search_results, format_transaction_short, format_transaction_table};
