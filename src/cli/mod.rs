//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod transaction;

pub use budget::{handle_budget_command, handle_summary, BudgetCommands};
pub use transaction::{handle_add, handle_delete, handle_list, AddArgs};
