//! Reports module for Tally
//!
//! Provides the monthly expense breakdown derived from the ledger.

pub mod monthly;

pub use monthly::{aggregate, month_name, CategorySummary, MonthGroup, INVALID_MONTH};
