//! Dashboard metrics
//!
//! Monthly and all-time sums, balance, budget usage and emergency-fund
//! progress, computed from a plain record set and a reference date.

use chrono::NaiveDate;
use serde::Serialize;

use super::month::MonthRef;
use super::status::{BudgetStatus, SavingsStatus};
use crate::models::{Budget, EmergencyFund, Money, Transaction, TransactionKind};

/// Derived values for one reference month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Month the monthly figures refer to
    #[serde(serialize_with = "serialize_month")]
    pub month: MonthRef,

    pub monthly_income: Money,
    pub monthly_expenses: Money,
    pub total_income: Money,
    pub total_expenses: Money,

    /// `total_income - total_expenses`
    pub current_balance: Money,

    /// Same as `monthly_expenses`
    pub budget_used: Money,
    /// Budget minus spending; negative when overspent
    pub budget_remaining: Money,
    /// Raw usage percentage, not clamped
    pub budget_percentage: f64,
    pub budget_status: BudgetStatus,

    /// Raw emergency fund progress, not clamped
    pub emergency_percentage: f64,
    pub emergency_remaining: Money,
    pub emergency_status: SavingsStatus,
}

fn serialize_month<S: serde::Serializer>(month: &MonthRef, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(month)
}

/// Sum the amounts of transactions of one kind, optionally limited to a month
fn sum_kind(transactions: &[Transaction], kind: TransactionKind, month: Option<MonthRef>) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .filter(|t| month.map_or(true, |m| m.contains(t.date)))
        .map(|t| t.amount)
        .sum()
}

/// Compute the metrics snapshot for the month containing `today`
pub fn compute_metrics(
    transactions: &[Transaction],
    budget: &Budget,
    emergency_fund: &EmergencyFund,
    today: NaiveDate,
) -> Metrics {
    let month = MonthRef::of(today);

    let monthly_income = sum_kind(transactions, TransactionKind::Income, Some(month));
    let monthly_expenses = sum_kind(transactions, TransactionKind::Expense, Some(month));
    let total_income = sum_kind(transactions, TransactionKind::Income, None);
    let total_expenses = sum_kind(transactions, TransactionKind::Expense, None);

    let budget_used = monthly_expenses;
    let budget_percentage = budget_used.percentage_of(budget.amount);
    let emergency_percentage = emergency_fund.saved.percentage_of(emergency_fund.target);

    Metrics {
        month,
        monthly_income,
        monthly_expenses,
        total_income,
        total_expenses,
        current_balance: total_income - total_expenses,
        budget_used,
        budget_remaining: budget.amount - budget_used,
        budget_percentage,
        budget_status: BudgetStatus::classify(budget.is_set(), budget_percentage),
        emergency_percentage,
        emergency_remaining: emergency_remaining(emergency_fund),
        emergency_status: SavingsStatus::classify(
            emergency_fund.has_target(),
            emergency_percentage,
        ),
    }
}

/// Amount still missing from the emergency fund target, never negative
pub fn emergency_remaining(fund: &EmergencyFund) -> Money {
    (fund.target - fund.saved).non_negative()
}

/// The last `count` transactions in insertion order, most recent first
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let start = transactions.len().saturating_sub(count);
    transactions[start..].iter().rev().collect()
}

/// One bar of the income-vs-expenses chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub amount: Money,
}

/// Bar chart data for the reference month: income first, then expenses
pub fn income_expense_chart(metrics: &Metrics) -> [ChartBar; 2] {
    [
        ChartBar {
            label: "Income",
            amount: metrics.monthly_income,
        },
        ChartBar {
            label: "Expenses",
            amount: metrics.monthly_expenses,
        },
    ]
}

/// Width of a progress bar in percent; the underlying value stays unclamped
pub fn progress_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}
