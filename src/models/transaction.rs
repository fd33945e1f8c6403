//! Transaction model
//!
//! A single signed ledger entry. Positive amounts are income, negative
//! amounts are expenses. Field names on disk follow the ledger document
//! format (`valor`, `descricao`, `data`, `data_edicao`).

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Format of `created_at` / `edited_at` timestamps
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Render a local time the way the ledger document stores it
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount (positive for income, negative for expense)
    #[serde(rename = "valor")]
    pub amount: Money,

    /// Free text label, also the source of the category key
    #[serde(rename = "descricao")]
    pub description: String,

    /// Creation time, `DD/MM/YYYY HH:MM`
    #[serde(rename = "data")]
    pub created_at: String,

    /// Time of the last edit, absent if never edited
    #[serde(
        rename = "data_edicao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub edited_at: Option<String>,
}

impl Transaction {
    /// Create a new, never edited transaction
    pub fn new(
        id: TransactionId,
        amount: Money,
        description: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            created_at: created_at.into(),
            edited_at: None,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn is_edited(&self) -> bool {
        self.edited_at.is_some()
    }

    /// Normalized description used to group expenses
    pub fn category_key(&self) -> String {
        self.description.trim().to_lowercase()
    }

    /// Date portion of `created_at` (`DD/MM/YYYY`)
    pub fn created_date(&self) -> &str {
        self.created_at
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.created_at, self.description, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(amount: i64, description: &str) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(1),
            Money::from_cents(amount),
            description,
            "15/01/2025 09:30",
        )
    }

    #[test]
    fn test_income_expense() {
        assert!(sample(1000, "Salary").is_income());
        assert!(sample(-1000, "Market").is_expense());

        let zero = sample(0, "Nothing");
        assert!(!zero.is_income());
        assert!(!zero.is_expense());
    }

    #[test]
    fn test_category_key_is_trimmed_and_lowercased() {
        assert_eq!(sample(-500, "  Coffee ").category_key(), "coffee");
    }

    #[test]
    fn test_created_date() {
        assert_eq!(sample(-500, "Coffee").created_date(), "15/01/2025");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 3, 5, 7, 8, 0).unwrap();
        assert_eq!(format_timestamp(at), "05/03/2024 07:08");
    }

    #[test]
    fn test_document_field_names() {
        let mut txn = sample(-3050, "Market");
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["valor"], -30.5);
        assert_eq!(json["descricao"], "Market");
        assert_eq!(json["data"], "15/01/2025 09:30");
        assert!(json.get("data_edicao").is_none());

        txn.edited_at = Some("16/01/2025 10:00".into());
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["data_edicao"], "16/01/2025 10:00");
    }
}
