//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger and its reports for
//! terminal display.

pub mod report;
pub mod transaction;

pub use report::{format_analysis, format_month_group};
pub use transaction::{
    format_balance, format_history, format_transaction_details, format_transaction_row,
};

/// Pad or cut a string to exactly `width` characters
pub(crate) fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
