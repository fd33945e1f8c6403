//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected user input (empty description, non-numeric amount)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The ledger document could not be read or parsed
    #[error("Load error: {0}")]
    Load(String),

    /// The ledger document could not be written; the mutation did not happen
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl TallyError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a failed write of the ledger document
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::Validation("description cannot be empty".into());
        assert_eq!(
            err.to_string(),
            "Validation error: description cannot be empty"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = TallyError::transaction_not_found("42");
        assert_eq!(err.to_string(), "Transaction not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_persistence_predicate() {
        let err = TallyError::Persistence("disk full".into());
        assert!(err.is_persistence());
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TallyError = io_err.into();
        assert!(matches!(err, TallyError::Io(_)));
    }
}
