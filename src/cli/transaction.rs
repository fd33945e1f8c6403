//! Transaction CLI commands
//!
//! Implements CLI commands for recording, changing and listing transactions.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_history, format_transaction_details};
use crate::error::{TallyError, TallyResult};
use crate::models::TransactionId;
use crate::services::Ledger;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a transaction (positive = income, negative = expense)
    Add {
        /// Amount, e.g. "+100" or "-30.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description, e.g. "Salary" or "Market"
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Change amount and description of a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// New description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List transactions, most recent first
    #[command(alias = "list")]
    History {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
        } => {
            let txn = ledger.add_transaction(&amount, &description.join(" "))?;

            let kind = if txn.is_income() {
                "Income"
            } else if txn.is_expense() {
                "Expense"
            } else {
                "Transaction"
            };
            println!("{} added:", kind);
            println!("  ID:          {}", txn.id);
            println!("  Amount:      {}", txn.amount.format_signed(symbol));
            println!("  Description: {}", txn.description);
            println!("  Date:        {}", txn.created_at);
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
        } => {
            let id = parse_id(&id)?;
            ledger.edit_transaction(id, &amount, &description.join(" "))?;
            println!("Transaction {} edited", id);
        }

        TransactionCommands::Delete { id, force } => {
            let id = parse_id(&id)?;
            let txn = ledger
                .find_by_id(id)
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;

            if !force {
                println!("About to delete transaction:");
                println!("  Description: {}", txn.description);
                println!("  Amount:      {}", txn.amount.format_signed(symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let description = txn.description.clone();
            ledger.delete_transaction(id)?;
            println!("Deleted transaction: {} ({})", id, description);
        }

        TransactionCommands::Clear { force } => {
            if !force {
                println!("This will delete all {} transactions.", ledger.len());
                println!("Use --force to confirm");
                return Ok(());
            }

            ledger.clear_all()?;
            println!("History cleared");
        }

        TransactionCommands::History { limit } => {
            let mut history = ledger.history();
            if let Some(limit) = limit {
                history.truncate(limit);
            }
            print!("{}", format_history(&history, symbol));
        }

        TransactionCommands::Show { id } => {
            let id = parse_id(&id)?;
            let txn = ledger
                .find_by_id(id)
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(txn, symbol));
        }
    }

    Ok(())
}

fn parse_id(text: &str) -> TallyResult<TransactionId> {
    text.parse()
        .map_err(|_| TallyError::Validation(format!("Invalid transaction ID: '{}'", text)))
}
