//! Dashboard, budget, emergency fund and report views

use crate::metrics::income_expense_chart;
use crate::services::Dashboard;

use super::format::{format_bar, format_percentage, progress_bar, separator, Theme, BAR_WIDTH};
use super::status::{budget_message, emergency_message, painted};
use super::transaction::format_transaction_short;

const WIDTH: usize = 60;

/// Summary cards plus recent transactions
pub fn format_dashboard(dashboard: &Dashboard, theme: &Theme) -> String {
    let metrics = &dashboard.metrics;
    let mut output = String::new();

    output.push_str(&format!("SpendVista: {}\n", metrics.month.name()));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Current balance:   {}\n",
        theme.signed_money(metrics.current_balance)
    ));
    output.push_str(&format!(
        "Monthly income:    {}\n",
        theme.money(metrics.monthly_income)
    ));
    output.push_str(&format!(
        "Monthly expenses:  {}\n",
        theme.money(metrics.monthly_expenses)
    ));
    output.push_str(&format!(
        "Budget remaining:  {}\n",
        theme.signed_money(metrics.budget_remaining)
    ));
    output.push('\n');

    output.push_str("Recent transactions\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if dashboard.recent.is_empty() {
        output.push_str("No transactions yet. Add your first transaction to get started!\n");
    } else {
        for txn in &dashboard.recent {
            output.push_str(&format_transaction_short(txn, theme));
            output.push('\n');
        }
    }

    output
}

/// Budget usage with progress bar and status message
pub fn format_budget(dashboard: &Dashboard, theme: &Theme) -> String {
    let metrics = &dashboard.metrics;
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly budget:  {}\n",
        theme.money(dashboard.budget.amount)
    ));
    output.push_str(&format!(
        "{} {}\n",
        progress_bar(metrics.budget_percentage, BAR_WIDTH),
        format_percentage(metrics.budget_percentage)
    ));
    output.push_str(&format!("Used:            {}\n", theme.money(metrics.budget_used)));
    output.push_str(&format!(
        "Remaining:       {}\n",
        theme.signed_money(metrics.budget_remaining)
    ));
    output.push_str(&painted(budget_message(metrics, theme), theme));
    output.push('\n');

    output
}

/// Emergency fund progress and status message
pub fn format_emergency(dashboard: &Dashboard, theme: &Theme) -> String {
    let metrics = &dashboard.metrics;
    let fund = &dashboard.emergency_fund;
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        progress_bar(metrics.emergency_percentage, BAR_WIDTH),
        format_percentage(metrics.emergency_percentage)
    ));
    output.push_str(&format!("Saved:       {}\n", theme.money(fund.saved)));
    output.push_str(&format!("Target:      {}\n", theme.money(fund.target)));
    output.push_str(&format!("Allocation:  {}% of each income\n", fund.allocation));
    output.push_str(&painted(emergency_message(fund, metrics, theme), theme));
    output.push('\n');

    output
}

/// Income-vs-expenses chart and the expense breakdown by category
pub fn format_report(dashboard: &Dashboard, theme: &Theme) -> String {
    let metrics = &dashboard.metrics;
    let mut output = String::new();

    output.push_str(&format!("Report: {}\n", metrics.month.name()));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let chart = income_expense_chart(metrics);
    let max = chart
        .iter()
        .map(|bar| bar.amount)
        .max()
        .unwrap_or_default();
    for bar in &chart {
        output.push_str(&format!(
            "{:<10} {} {}\n",
            bar.label,
            format_bar(bar.amount, max, BAR_WIDTH),
            theme.money(bar.amount)
        ));
    }
    output.push('\n');

    output.push_str("Expenses by category\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if dashboard.categories.is_empty() {
        output.push_str("No expenses this month.\n");
        return output;
    }

    let largest = dashboard
        .categories
        .iter()
        .map(|c| c.total)
        .max()
        .unwrap_or_default();
    let name_width = dashboard
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    for category in &dashboard.categories {
        output.push_str(&format!(
            "{:<name_width$} {} {:>12} {:>7}\n",
            category.category,
            format_bar(category.total, largest, BAR_WIDTH),
            theme.money(category.total),
            format_percentage(category.share_of(metrics.monthly_expenses)),
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{categorize_expenses, compute_metrics, recent_transactions};
    use crate::models::{Budget, EmergencyFund, Money, Transaction};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn dashboard(transactions: Vec<Transaction>) -> Dashboard {
        let budget = Budget::new(Money::from_units(1000));
        let fund = EmergencyFund::default();
        let metrics = compute_metrics(&transactions, &budget, &fund, today());
        Dashboard {
            today: today(),
            chart: income_expense_chart(&metrics),
            categories: categorize_expenses(&transactions, today()),
            recent: recent_transactions(&transactions, 5).into_iter().cloned().collect(),
            goals: Vec::new(),
            metrics,
            budget,
            emergency_fund: fund,
        }
    }

    #[test]
    fn test_dashboard_empty_state() {
        let output = format_dashboard(&dashboard(Vec::new()), &Theme::default());
        assert!(output.contains("SpendVista: October 2026"));
        assert!(output.contains("No transactions yet."));
        assert!(output.contains("Budget remaining:  R1000.00"));
    }

    #[test]
    fn test_report_breakdown() {
        let transactions = vec![
            Transaction::income("Salary", Money::from_units(5000), today()),
            Transaction::expense("Groceries Woolworths", Money::from_units(200), today()),
            Transaction::expense("Groceries Checkers", Money::from_units(150), today()),
            Transaction::expense("Fuel", Money::from_units(350), today()),
        ];

        let output = format_report(&dashboard(transactions), &Theme::default());
        assert!(output.contains("Income"));
        assert!(output.contains("R5000.00"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("R350.00"));
        assert!(output.contains("50.0%"));
    }

    #[test]
    fn test_report_without_expenses() {
        let output = format_report(&dashboard(Vec::new()), &Theme::default());
        assert!(output.contains("No expenses this month."));
    }

    #[test]
    fn test_budget_view_warns() {
        let transactions = vec![Transaction::expense(
            "Rent",
            Money::from_units(850),
            today(),
        )];
        let output = format_budget(&dashboard(transactions), &Theme::default());
        assert!(output.contains("85.0%"));
        assert!(output.contains("Consider slowing down your spending."));
    }

    #[test]
    fn test_emergency_view_unset() {
        let output = format_emergency(&dashboard(Vec::new()), &Theme::default());
        assert!(output.contains("Allocation:  10% of each income"));
        assert!(output.contains("haven't set an emergency fund goal"));
    }
}
