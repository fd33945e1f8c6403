//! Core data models for Tally
//!
//! This module contains the data structures stored in the ledger document:
//! transactions, their ids and the money amounts they carry.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{format_timestamp, Transaction, TIMESTAMP_FORMAT};
