//! Expense Ledger - income/expense tracking against a monthly budget
//!
//! This library provides the core of the `ledger` command: a ledger of
//! transactions kept newest first, totals and budget-remaining figures
//! computed from it, free-text search over the rendered table, and a small
//! JSON store for persistence.
//!
//! # Architecture
//!
//! - `config`: Data directory and settings
//! - `error`: Custom error types
//! - `models`: Money, transactions and the ledger
//! - `storage`: JSON file storage layer
//! - `services`: Summary, search and command handlers
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{LedgerPaths, Settings};
//! use expense_ledger::display::DisplayFormat;
//! use expense_ledger::services::LedgerService;
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let service = LedgerService::new(&storage, DisplayFormat::from_settings(&settings));
//! service.set_budget("2000")?;
//! let snapshot = service.snapshot()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
