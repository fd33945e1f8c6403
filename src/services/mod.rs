//! Service layer for Tally
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and keeping memory and disk in step.

pub mod ledger;

pub use ledger::{parse_amount, Ledger};
