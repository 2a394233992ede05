//! Transaction CLI commands
//!
//! Add, delete and list transactions.

use chrono::Local;
use clap::Args;

use crate::display::{format_search_results, format_transaction_short, format_transaction_table};
use crate::error::LedgerResult;
use crate::models::{NewTransaction, TransactionId};
use crate::services::LedgerService;

/// Arguments for `ledger add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Description
    pub name: String,
    /// Amount (e.g., "1200" or "49.99")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Date and time (YYYY-MM-DDTHH:MM or YYYY-MM-DD), defaults to now
    #[arg(short, long)]
    pub date: Option<String>,
    /// Payment method
    #[arg(short, long, default_value = "")]
    pub source: String,
    /// Recipient
    #[arg(short, long, default_value = "")]
    pub recipient: String,
    /// Record as income instead of an expense
    #[arg(short, long)]
    pub income: bool,
}

/// Handle `ledger add`
pub fn handle_add(service: &LedgerService, args: AddArgs) -> LedgerResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| Local::now().format("%Y-%m-%dT%H:%M").to_string());

    let input = NewTransaction::from_form(
        &args.name,
        &args.amount,
        &date,
        &args.source,
        &args.recipient,
        args.income,
    )?;

    let txn = service.add_transaction(input)?;
    println!("Added {}", format_transaction_short(&txn, service.format()));
    Ok(())
}

/// Handle `ledger delete`
pub fn handle_delete(service: &LedgerService, id: TransactionId) -> LedgerResult<()> {
    if service.delete_transaction(id)? {
        println!("Deleted transaction #{}", id);
    } else {
        println!("No transaction with id #{}", id);
    }
    Ok(())
}

/// Handle `ledger list`, optionally filtered by a search query
pub fn handle_list(service: &LedgerService, search: Option<&str>) -> LedgerResult<()> {
    let all = service.transactions()?;

    let output = match search {
        Some(query) => {
            let results = service.search(query)?;
            format_search_results(&results, all.len(), service.format())
        }
        None => format_transaction_table(&all, service.format()),
    };

    print!("{}", output);
    Ok(())
}
