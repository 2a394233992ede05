//! Summary panel formatting
//!
//! Income is shown signed, expense as a negative figure, balance without
//! a leading sign, and budget remaining signed.

use super::format::DisplayFormat;
use crate::models::Money;
use crate::services::AggregateSnapshot;

/// Display strings for an aggregate snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSnapshot {
    pub income: String,
    pub expense: String,
    pub balance: String,
    pub budget_remaining: String,
}

impl FormattedSnapshot {
    pub fn new(snapshot: &AggregateSnapshot, format: &DisplayFormat) -> Self {
        Self {
            income: format.signed(snapshot.income_total),
            expense: format.signed(-snapshot.expense_total),
            balance: format.unsigned(snapshot.balance),
            budget_remaining: format.signed(snapshot.budget_remaining),
        }
    }
}

/// Format the summary panel
pub fn format_summary(snapshot: &AggregateSnapshot, format: &DisplayFormat) -> String {
    let figures = FormattedSnapshot::new(snapshot, format);

    let mut output = String::new();
    output.push_str(&format!("Balance:          {}\n", figures.balance));
    output.push_str(&format!("Income:           {}\n", figures.income));
    output.push_str(&format!("Expense:          {}\n", figures.expense));
    output.push_str(&format!("Budget remaining: {}\n", figures.budget_remaining));
    output
}

/// Format the stored budget
pub fn format_budget(budget: Money, format: &DisplayFormat) -> String {
    format!("Monthly budget: {}\n", format.signed(budget))
}
