//! Transaction display formatting
//!
//! Renders the ledger as a table for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::DisplayFormat;
use crate::models::Transaction;

/// Shown instead of a table when the ledger is empty
pub const EMPTY_LEDGER_MESSAGE: &str = "No transactions";

/// Shown instead of a table when a search matches nothing
pub const NO_MATCHES_MESSAGE: &str = "NO MATCHING TRANSACTIONS FOUND";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Payment Method")]
    source: String,
    #[tabled(rename = "Recipient")]
    recipient: String,
    #[tabled(rename = "Date")]
    date: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, format: &DisplayFormat) -> Self {
        Self {
            id: txn.id.to_string(),
            name: txn.name.clone(),
            amount: format.transaction_amount(txn),
            source: txn.source.clone(),
            recipient: txn.recipient.clone(),
            date: format.datetime(&txn.date),
        }
    }
}

fn render_table<'a, I>(transactions: I, format: &DisplayFormat) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows = transactions
        .into_iter()
        .map(|txn| TransactionRow::new(txn, format));

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format the whole ledger, in the order given
pub fn format_transaction_table(transactions: &[Transaction], format: &DisplayFormat) -> String {
    if transactions.is_empty() {
        return format!("{}\n", EMPTY_LEDGER_MESSAGE);
    }
    render_table(transactions, format)
}

/// Format search results
///
/// `ledger_len` distinguishes an empty ledger from a search with no hits.
pub fn format_search_results(
    results: &[Transaction],
    ledger_len: usize,
    format: &DisplayFormat,
) -> String {
    if ledger_len == 0 {
        return format!("{}\n", EMPTY_LEDGER_MESSAGE);
    }
    if results.is_empty() {
        return format!("{}\n", NO_MATCHES_MESSAGE);
    }
    render_table(results, format)
}

/// One-line confirmation after adding a transaction
pub fn format_transaction_short(txn: &Transaction, format: &DisplayFormat) -> String {
    let name = if txn.name.is_empty() {
        "(no description)"
    } else {
        &txn.name
    };

    format!(
        "#{} {} {} on {}",
        txn.id,
        name,
        format.transaction_amount(txn),
        format.datetime(&txn.date)
    )
}
