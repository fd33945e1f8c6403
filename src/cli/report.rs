//! CLI commands for reports
//!
//! Balance and the monthly expense analysis.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::format_analysis;
use crate::display::transaction::format_balance;
use crate::error::TallyResult;
use crate::services::Ledger;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the current balance
    Balance,

    /// Show expenses per month, grouped by description
    #[command(alias = "analyze")]
    Analysis {
        /// Show only the N most recent months
        #[arg(short, long)]
        months: Option<usize>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Balance => {
            println!("{}", format_balance(ledger.balance(), symbol));
        }

        ReportCommands::Analysis { months } => {
            let mut groups = ledger.analysis();
            if let Some(months) = months {
                groups.truncate(months);
            }
            print!("{}", format_analysis(&groups, symbol));
        }
    }

    Ok(())
}
