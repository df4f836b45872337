//! Ledger - terminal-based personal finance ledger
//!
//! This library provides the core of the `ledger` command: recording
//! expenses and income, per-category monthly budgets and savings goals in a
//! local SQLite database.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, budgets, goals, money)
//! - `storage`: SQLite storage layer, schema and demonstration data
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `cli`: Command handlers for the `ledger` binary
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use ledger::services::LedgerService;
//! use ledger::storage::Storage;
//!
//! # fn main() -> ledger::error::LedgerResult<()> {
//! let storage = Storage::open_in_memory()?;
//! storage.initialize()?;
//!
//! let expenses = LedgerService::expenses(&storage);
//! expenses.add("2024-05-01", "tesco shopping", "food", "50.00")?;
//! assert_eq!(expenses.total()?.map(|m| m.cents()), Some(5000));
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
