//! Savings goal display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::metrics::{GoalProgress, SavingsStatus};

use super::format::{format_percentage, progress_bar, truncate, Theme, Tone};

const GOAL_BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Progress")]
    bar: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format goals as a table with progress bars
pub fn format_goal_list(goals: &[GoalProgress], theme: &Theme) -> String {
    if goals.is_empty() {
        return "No savings goals yet. Create your first goal to start saving!".to_string();
    }

    let rows = goals.iter().map(|g| GoalRow {
        id: g.goal_id.to_string(),
        name: truncate(&g.name, 24),
        bar: progress_bar(g.percentage, GOAL_BAR_WIDTH),
        percentage: format_percentage(g.percentage),
        saved: theme.money(g.saved),
        target: theme.money(g.target),
        remaining: theme.money(g.remaining),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Detail view of a single goal
pub fn format_goal_details(goal: &GoalProgress, theme: &Theme) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal:      {} ({})\n", goal.name, goal.goal_id));
    output.push_str(&format!(
        "Progress:  {} {}\n",
        progress_bar(goal.percentage, GOAL_BAR_WIDTH),
        format_percentage(goal.percentage)
    ));
    output.push_str(&format!("Saved:     {}\n", theme.money(goal.saved)));
    output.push_str(&format!("Target:    {}\n", theme.money(goal.target)));

    if goal.status == SavingsStatus::Complete {
        output.push_str(&theme.paint(Tone::Positive, "Goal reached!"));
    } else {
        output.push_str(&format!("Remaining: {}", theme.money(goal.remaining)));
    }

    output
}
