//! Status messages for the budget and the emergency fund

use crate::metrics::{BudgetStatus, Metrics, SavingsStatus};
use crate::models::EmergencyFund;

use super::format::{format_percentage, Theme, Tone};

/// Sentence describing how the month's spending compares to the budget
pub fn budget_message(metrics: &Metrics, theme: &Theme) -> (Tone, String) {
    match metrics.budget_status {
        BudgetStatus::Unset => (
            Tone::Neutral,
            "You haven't set a budget yet. Set a monthly budget to start tracking your spending."
                .to_string(),
        ),
        BudgetStatus::Exceeded => (
            Tone::Danger,
            format!(
                "You've exceeded your monthly budget by {}.",
                theme.money(metrics.budget_remaining.abs())
            ),
        ),
        BudgetStatus::Warning => (
            Tone::Warning,
            format!(
                "You've used {} of your budget. Consider slowing down your spending.",
                format_percentage(metrics.budget_percentage)
            ),
        ),
        BudgetStatus::OnTrack => (
            Tone::Positive,
            format!(
                "You're on track with your budget. {} remaining for this month.",
                theme.money(metrics.budget_remaining)
            ),
        ),
    }
}

/// Sentence describing emergency fund progress
pub fn emergency_message(fund: &EmergencyFund, metrics: &Metrics, theme: &Theme) -> (Tone, String) {
    match metrics.emergency_status {
        SavingsStatus::Unset => (
            Tone::Neutral,
            "You haven't set an emergency fund goal yet. Financial experts recommend saving 3-6 months of expenses."
                .to_string(),
        ),
        SavingsStatus::Complete => (
            Tone::Positive,
            format!(
                "Congratulations! You've reached your emergency fund goal of {}.",
                theme.money(fund.target)
            ),
        ),
        SavingsStatus::InProgress => (
            Tone::Neutral,
            format!(
                "You've saved {} of your {} goal. {} remaining.",
                theme.money(fund.saved),
                theme.money(fund.target),
                theme.money(metrics.emergency_remaining)
            ),
        ),
    }
}

/// Render a message in its tone
pub fn painted((tone, text): (Tone, String), theme: &Theme) -> String {
    theme.paint(tone, &text)
}
