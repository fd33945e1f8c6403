//! Transaction display formatting
//!
//! Provides utilities for formatting the transaction history and balance for
//! terminal display.

use crate::models::{Money, Transaction};

use super::truncate;

/// Format a single transaction for display (history row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let edited = if txn.is_edited() { " *" } else { "" };

    format!(
        "{:>18}  {:10}  {}  {:>14}{}",
        txn.id,
        txn.created_date(),
        truncate(&txn.description, 24),
        txn.amount.format_signed(symbol),
        edited
    )
}

/// Format transactions as a history list, in the order given
pub fn format_history(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>18}  {:10}  {:24}  {:>14}\n",
        "Id", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    if transactions.iter().any(Transaction::is_edited) {
        output.push_str("\n* edited\n");
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let kind = if txn.is_income() {
        "Income"
    } else if txn.is_expense() {
        "Expense"
    } else {
        "Neutral"
    };

    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_signed(symbol)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Created:     {}\n", txn.created_at));
    if let Some(edited_at) = &txn.edited_at {
        output.push_str(&format!("Edited:      {}\n", edited_at));
    }
    output
}

/// Format the running balance line
pub fn format_balance(balance: Money, symbol: &str) -> String {
    format!("Balance: {}", balance.format_with_symbol(symbol))
}
