use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_add, handle_budget_command, handle_delete, handle_list, handle_summary, AddArgs,
    BudgetCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::display::DisplayFormat;
use expense_ledger::models::TransactionId;
use expense_ledger::services::LedgerService;
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Track income and expenses against a monthly budget",
    long_about = "Log income and expense entries, set a monthly budget, and see \
                  running totals and a searchable transaction table, all stored \
                  locally."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    Add(AddArgs),

    /// Delete a transaction by id
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: TransactionId,
    },

    /// Show the transaction table, newest first
    #[command(alias = "ls")]
    List {
        /// Only show transactions whose displayed text contains this
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show balance, income, expense and budget remaining
    Summary,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("expense_ledger=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let service = LedgerService::new(&storage, DisplayFormat::from_settings(&settings));

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&service, args)?,
        Some(Commands::Delete { id }) => handle_delete(&service, id)?,
        Some(Commands::List { search }) => handle_list(&service, search.as_deref())?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&service, cmd)?,
        Some(Commands::Summary) => handle_summary(&service)?,
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budget file:       {}", paths.budget_file().display());
            println!("Transactions:      {}", storage.transactions.count()?);
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.datetime_format);
        }
        None => handle_list(&service, None)?,
    }

    Ok(())
}
