//! Summary calculations
//!
//! Income, expense, balance and budget-remaining figures. Everything is
//! recomputed from the full ledger on each call.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionType};

/// Income and expense totals, both unsigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    pub fn balance(&self) -> LedgerResult<Money> {
        compute_balance(self.income, self.expense)
    }
}

/// Sum amounts per transaction type
pub fn compute_totals(transactions: &[Transaction]) -> LedgerResult<Totals> {
    transactions
        .iter()
        .try_fold(Totals::default(), |mut totals, txn| -> LedgerResult<Totals> {
            let total = match txn.kind {
                TransactionType::Income => &mut totals.income,
                TransactionType::Expense => &mut totals.expense,
            };
            *total = total
                .checked_add(txn.amount)
                .ok_or_else(|| LedgerError::Overflow(format!("{} total", txn.kind)))?;
            Ok(totals)
        })
}

pub fn compute_balance(income: Money, expense: Money) -> LedgerResult<Money> {
    income
        .checked_sub(expense)
        .ok_or_else(|| LedgerError::Overflow("balance".into()))
}

/// Budget minus expenses; the budget has to be set
pub fn compute_budget_remaining(budget: Option<Money>, expense: Money) -> LedgerResult<Money> {
    let budget = budget.ok_or(LedgerError::BudgetNotSet)?;
    budget
        .checked_sub(expense)
        .ok_or_else(|| LedgerError::Overflow("budget remaining".into()))
}

/// Derived figures for the ledger at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateSnapshot {
    pub income_total: Money,
    pub expense_total: Money,
    pub balance: Money,
    pub budget_remaining: Money,
}

impl AggregateSnapshot {
    /// Compute all figures; fails with `BudgetNotSet` when there is no budget
    pub fn compute(transactions: &[Transaction], budget: Option<Money>) -> LedgerResult<Self> {
        let totals = compute_totals(transactions)?;
        let budget_remaining = compute_budget_remaining(budget, totals.expense)?;

        Ok(Self {
            income_total: totals.income,
            expense_total: totals.expense,
            balance: totals.balance()?,
            budget_remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::NaiveDate;

    fn txn(id: u64, cents: i64, kind: TransactionType, day: u32) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            name: format!("t{}", id),
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            source: String::new(),
            recipient: String::new(),
            kind,
        }
    }

    #[test]
    fn test_empty_ledger_totals() {
        let totals = compute_totals(&[]).unwrap();
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.balance().unwrap(), Money::zero());
    }

    #[test]
    fn test_totals_group_by_type() {
        let ledger = vec![
            txn(1, 500_000, TransactionType::Income, 1),
            txn(2, 120_000, TransactionType::Expense, 2),
            txn(3, 2_550, TransactionType::Expense, 3),
            txn(4, 10_000, TransactionType::Income, 4),
        ];

        let totals = compute_totals(&ledger).unwrap();
        assert_eq!(totals.income, Money::from_cents(510_000));
        assert_eq!(totals.expense, Money::from_cents(122_550));
        assert_eq!(totals.balance().unwrap(), Money::from_cents(387_450));
    }

    #[test]
    fn test_totals_ignore_order() {
        let mut ledger = vec![
            txn(1, 300, TransactionType::Income, 1),
            txn(2, 700, TransactionType::Expense, 2),
            txn(3, 1100, TransactionType::Expense, 3),
            txn(4, 1300, TransactionType::Income, 4),
        ];
        let forward = compute_totals(&ledger).unwrap();

        ledger.reverse();
        assert_eq!(compute_totals(&ledger).unwrap(), forward);

        ledger.swap(0, 2);
        assert_eq!(compute_totals(&ledger).unwrap(), forward);
    }

    #[test]
    fn test_totals_overflow_is_an_error() {
        let ledger = vec![
            txn(1, i64::MAX / 2 + 1, TransactionType::Expense, 1),
            txn(2, i64::MAX / 2 + 1, TransactionType::Expense, 2),
        ];

        let err = compute_totals(&ledger).unwrap_err();
        assert!(matches!(err, LedgerError::Overflow(_)));
        assert!(matches!(
            AggregateSnapshot::compute(&ledger, Some(Money::zero())),
            Err(LedgerError::Overflow(_))
        ));
    }

    #[test]
    fn test_balance_and_remaining_overflow_is_an_error() {
        let huge = Money::from_cents(i64::MAX);
        assert!(compute_balance(-huge, huge).is_err());
        assert!(compute_budget_remaining(Some(-huge), huge).is_err());
    }

    #[test]
    fn test_budget_remaining_requires_budget() {
        for expense in [0, 1, 120_000] {
            let err = compute_budget_remaining(None, Money::from_cents(expense)).unwrap_err();
            assert!(err.is_budget_not_set());
        }
    }

    #[test]
    fn test_budget_remaining_can_go_negative() {
        let remaining =
            compute_budget_remaining(Some(Money::from_cents(1000)), Money::from_cents(2500))
                .unwrap();
        assert_eq!(remaining, Money::from_cents(-1500));
    }

    #[test]
    fn test_salary_rent_scenario() {
        let ledger = vec![
            txn(2, 120_000, TransactionType::Expense, 2),
            txn(1, 500_000, TransactionType::Income, 1),
        ];

        let snapshot =
            AggregateSnapshot::compute(&ledger, Some(Money::from_cents(200_000))).unwrap();
        assert_eq!(snapshot.income_total, Money::from_cents(500_000));
        assert_eq!(snapshot.expense_total, Money::from_cents(120_000));
        assert_eq!(snapshot.balance, Money::from_cents(380_000));
        assert_eq!(snapshot.budget_remaining, Money::from_cents(80_000));
    }

    #[test]
    fn test_snapshot_without_budget() {
        let ledger = vec![txn(1, 100, TransactionType::Expense, 1)];
        assert!(AggregateSnapshot::compute(&ledger, None)
            .unwrap_err()
            .is_budget_not_set());
    }
}
