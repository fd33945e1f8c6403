//! Transaction store for the ledger document
//!
//! The document is a single JSON array of transactions, loaded and saved
//! wholesale. Records written by older versions may lack an `id`; those are
//! given one on load and the document is rewritten once.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::TallyError;
use crate::models::{Money, Transaction, TransactionId};

use super::file_io::{read_json, set_aside, write_json_atomic};

/// On-disk shape of a transaction, tolerant of a missing id
#[derive(Debug, Clone, Deserialize)]
struct StoredTransaction {
    #[serde(default)]
    id: Option<TransactionId>,
    #[serde(rename = "valor")]
    amount: Money,
    #[serde(rename = "descricao")]
    description: String,
    #[serde(rename = "data")]
    created_at: String,
    #[serde(rename = "data_edicao", default)]
    edited_at: Option<String>,
}

/// Loads and saves the whole transaction collection
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a store backed by the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every transaction in document order
    ///
    /// A missing document is an empty ledger. Unreadable or unparsable
    /// documents yield `TallyError::Load`. Records without an id are
    /// backfilled and the document is saved again before returning.
    pub fn load(&self) -> Result<Vec<Transaction>, TallyError> {
        let stored: Vec<StoredTransaction> = read_json(&self.path)?;
        let (transactions, backfilled) = backfill_ids(stored);

        if backfilled > 0 {
            info!(
                path = %self.path.display(),
                backfilled,
                "assigned ids to legacy transactions"
            );
            if let Err(e) = self.save(&transactions) {
                // The ids stay in memory and are written by the next save
                warn!(error = %e, "failed to persist backfilled ids");
            }
        }

        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded transactions"
        );
        Ok(transactions)
    }

    /// Replace the document with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), TallyError> {
        write_json_atomic(&self.path, transactions)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }

    /// Move the current document to `<file>.corrupt`, if there is one
    pub fn set_aside(&self) -> Result<Option<PathBuf>, TallyError> {
        let moved = set_aside(&self.path)?;
        if let Some(target) = &moved {
            warn!(
                from = %self.path.display(),
                to = %target.display(),
                "moved unreadable ledger aside"
            );
        }
        Ok(moved)
    }
}

/// Give every record without an id a fresh one, keeping document order
fn backfill_ids(stored: Vec<StoredTransaction>) -> (Vec<Transaction>, usize) {
    let now = Utc::now();
    let mut highest = stored.iter().filter_map(|s| s.id).max();
    let mut backfilled = 0;

    let transactions = stored
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = match record.id {
                Some(id) => id,
                None => {
                    let id = TransactionId::allocate(now, index, highest);
                    highest = Some(id);
                    backfilled += 1;
                    id
                }
            };
            Transaction {
                id,
                amount: record.amount,
                description: record.description,
                created_at: record.created_at,
                edited_at: record.edited_at,
            }
        })
        .collect();

    (transactions, backfilled)
}
