//! Budget CLI commands
//!
//! Implements setting and showing the monthly budget, and the summary
//! panel that depends on it.

use clap::Subcommand;

use crate::display::{format_budget, format_summary};
use crate::error::LedgerResult;
use crate::services::LedgerService;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Amount (e.g., "2000" or "2000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the monthly budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(service: &LedgerService, cmd: BudgetCommands) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = service.set_budget(&amount)?;
            print!("{}", format_budget(budget, service.format()));
        }
        BudgetCommands::Show => match service.budget()? {
            Some(budget) => print!("{}", format_budget(budget, service.format())),
            None => println!("No budget set. Run 'ledger budget set <amount>' to set one."),
        },
    }

    Ok(())
}

/// Handle `ledger summary`
///
/// Fails with `BudgetNotSet` until a budget has been set.
pub fn handle_summary(service: &LedgerService) -> LedgerResult<()> {
    let snapshot = service.snapshot()?;
    print!("{}", format_summary(&snapshot, service.format()));
    Ok(())
}
