//! Storage layer for Tally
//!
//! Provides JSON file storage for the ledger document with atomic writes
//! and automatic directory creation.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionStore;
