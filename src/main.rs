use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally::cli::{
    handle_report_command, handle_transaction_command, ReportCommands, TransactionCommands,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::services::Ledger;
use tally::storage::file_io::corrupt_path_for;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal finance ledger with monthly expense analysis",
    long_about = "Tally records income and expenses, keeps a running balance, \
                  and breaks down each month's spending by description."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = settings.ledger_path(&paths);

    match cli.command {
        Commands::Config => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", ledger_path.display());
            println!("Currency:       {}", settings.currency_symbol);
        }
        Commands::Transaction(cmd) => {
            let mut ledger = Ledger::open(ledger_path);
            warn_unreadable(&ledger);
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let ledger = Ledger::open(ledger_path);
            warn_unreadable(&ledger);
            handle_report_command(&ledger, &settings, cmd)?;
        }
    }

    Ok(())
}

fn warn_unreadable(ledger: &Ledger) {
    if let Some(err) = ledger.load_error() {
        println!("Warning: {}", err);
        println!(
            "Showing an empty ledger. The next change keeps the old file as {}",
            corrupt_path_for(ledger.path()).display()
        );
        println!();
    }
}
