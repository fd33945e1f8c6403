//! Tally - personal finance ledger
//!
//! This library provides the core of the Tally finance tracker: a persisted
//! ledger of signed transactions, its running balance, and a monthly
//! breakdown of expenses grouped by description.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, ids, money)
//! - `storage`: JSON document storage with atomic writes
//! - `services`: The ledger and its command surface
//! - `reports`: Monthly expense analysis
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `tally` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use tally::services::Ledger;
//!
//! let mut ledger = Ledger::open("transactions.json");
//! ledger.add_transaction("+100.00", "Salary")?;
//! ledger.add_transaction("-30.50", "Market")?;
//! assert_eq!(ledger.balance().to_string(), "69.50");
//! # Ok::<(), tally::TallyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
