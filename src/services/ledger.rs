//! Ledger service
//!
//! Owns the ordered transaction collection and the store behind it. Every
//! mutation builds the next collection, writes it, and only then replaces the
//! in-memory state, so memory never runs ahead of the document on disk.

use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use tracing::{info, warn};

use crate::error::{TallyError, TallyResult};
use crate::models::{format_timestamp, Money, Transaction, TransactionId};
use crate::reports::monthly::{aggregate, MonthGroup};
use crate::storage::TransactionStore;

/// The authoritative, persisted list of transactions
#[derive(Debug)]
pub struct Ledger {
    store: TransactionStore,
    /// Creation order, oldest first
    transactions: Vec<Transaction>,
    load_error: Option<TallyError>,
    /// The unreadable document is still in place and must be moved before a write
    set_aside_pending: bool,
}

impl Ledger {
    /// Open the ledger backed by the document at `path`
    ///
    /// Never fails: an unreadable document is logged, kept available via
    /// [`Ledger::load_error`], and the ledger starts empty. The first
    /// mutation moves that document to `<file>.corrupt` before writing.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::from_store(TransactionStore::new(path))
    }

    /// Open the ledger on an existing store
    pub fn from_store(store: TransactionStore) -> Self {
        let (transactions, load_error) = match store.load() {
            Ok(transactions) => {
                info!(count = transactions.len(), "ledger opened");
                (transactions, None)
            }
            Err(e) => {
                warn!(
                    path = %store.path().display(),
                    error = %e,
                    "could not load ledger, starting empty"
                );
                (Vec::new(), Some(e))
            }
        };

        Self {
            store,
            transactions,
            set_aside_pending: load_error.is_some(),
            load_error,
        }
    }

    /// Error hit while loading the document, if any
    pub fn load_error(&self) -> Option<&TallyError> {
        self.load_error.as_ref()
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All transactions in creation order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Record a new transaction
    pub fn add(&mut self, amount: Money, description: &str) -> TallyResult<Transaction> {
        let description = validate_description(description)?;

        let highest = self.transactions.iter().map(|t| t.id).max();
        let id = TransactionId::allocate(Utc::now(), self.transactions.len(), highest);
        let txn = Transaction::new(id, amount, description, format_timestamp(Local::now()));

        let mut next = self.transactions.clone();
        next.push(txn.clone());
        self.commit(next)?;

        info!(id = %txn.id, amount = %txn.amount, "transaction added");
        Ok(txn)
    }

    /// Change amount and description of an existing transaction
    ///
    /// `id` and `created_at` are preserved; `edited_at` is stamped.
    pub fn edit(
        &mut self,
        id: TransactionId,
        amount: Money,
        description: &str,
    ) -> TallyResult<Transaction> {
        let index = self.position(id)?;
        let description = validate_description(description)?;

        let mut next = self.transactions.clone();
        let txn = &mut next[index];
        txn.amount = amount;
        txn.description = description;
        txn.edited_at = Some(format_timestamp(Local::now()));
        let edited = txn.clone();

        self.commit(next)?;

        info!(id = %id, "transaction edited");
        Ok(edited)
    }

    /// Remove a transaction, returning it
    pub fn delete(&mut self, id: TransactionId) -> TallyResult<Transaction> {
        let index = self.position(id)?;

        let mut next = self.transactions.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(id = %id, "transaction deleted");
        Ok(removed)
    }

    /// Remove every transaction
    pub fn clear(&mut self) -> TallyResult<()> {
        let count = self.transactions.len();
        self.commit(Vec::new())?;
        info!(count, "ledger cleared");
        Ok(())
    }

    /// Sum of all current amounts
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Look up a transaction by id
    pub fn find_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Transactions most recent first
    pub fn list_descending(&self) -> Vec<Transaction> {
        self.transactions.iter().rev().cloned().collect()
    }

    // Command surface for presentation layers, taking raw text input.

    /// Parse and record a new transaction
    pub fn add_transaction(
        &mut self,
        amount_text: &str,
        description_text: &str,
    ) -> TallyResult<Transaction> {
        let amount = parse_amount(amount_text)?;
        self.add(amount, description_text)
    }

    /// Parse and apply an edit
    pub fn edit_transaction(
        &mut self,
        id: TransactionId,
        amount_text: &str,
        description_text: &str,
    ) -> TallyResult<()> {
        self.position(id)?;
        let amount = parse_amount(amount_text)?;
        self.edit(id, amount, description_text).map(|_| ())
    }

    pub fn delete_transaction(&mut self, id: TransactionId) -> TallyResult<()> {
        self.delete(id).map(|_| ())
    }

    pub fn clear_all(&mut self) -> TallyResult<()> {
        self.clear()
    }

    /// Transactions most recent first
    pub fn history(&self) -> Vec<Transaction> {
        self.list_descending()
    }

    /// Monthly expense breakdown, most recent month first
    pub fn analysis(&self) -> Vec<MonthGroup> {
        aggregate(&self.transactions)
    }

    fn position(&self, id: TransactionId) -> TallyResult<usize> {
        self.transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))
    }

    /// Persist `next`, then adopt it
    fn commit(&mut self, next: Vec<Transaction>) -> TallyResult<()> {
        if self.set_aside_pending {
            if let Err(e) = self.store.set_aside() {
                warn!(error = %e, "unreadable ledger left in place, nothing written");
                return Err(e);
            }
            self.set_aside_pending = false;
        }

        if let Err(e) = self.store.save(&next) {
            warn!(error = %e, "save failed, ledger left unchanged");
            return Err(e);
        }
        self.transactions = next;
        Ok(())
    }
}

/// Parse user-typed amount text
pub fn parse_amount(text: &str) -> TallyResult<Money> {
    Money::parse(text).map_err(|e| TallyError::Validation(e.to_string()))
}

/// Trim a description, rejecting blank ones
fn validate_description(text: &str) -> TallyResult<String> {
    let description = text.trim();
    if description.is_empty() {
        return Err(TallyError::Validation("Description cannot be empty".into()));
    }
    Ok(description.to_string())
}
