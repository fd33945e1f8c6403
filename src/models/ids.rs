//! Transaction identifiers
//!
//! Ids are plain integers in the ledger document. New ids are derived from a
//! microsecond timestamp plus a disambiguating offset, and are always pushed
//! past the highest id already in use so two ids can never collide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap an existing raw id
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Allocate a fresh id
    ///
    /// The candidate is `now` in microseconds plus `offset`. If that would not
    /// be strictly greater than `highest` (clock skew, several ids inside the
    /// same microsecond), the id after `highest` is used instead.
    pub fn allocate(now: DateTime<Utc>, offset: usize, highest: Option<TransactionId>) -> Self {
        let candidate = now
            .timestamp_micros()
            .saturating_add(i64::try_from(offset).unwrap_or(i64::MAX));
        match highest {
            Some(TransactionId(max)) if candidate <= max => Self(max.saturating_add(1)),
            _ => Self(candidate),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TransactionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
