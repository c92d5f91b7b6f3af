//! Budget CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget, Theme};
use crate::error::SpendVistaResult;
use crate::services::{BudgetService, DashboardService};
use crate::storage::Storage;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show this month's budget usage
    Show,

    /// Set the monthly budget (0 clears it)
    Set {
        /// Amount (e.g. "5000" or "5000.00")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> SpendVistaResult<()> {
    let theme = Theme::from_settings(settings);

    if let BudgetCommands::Set { amount } = cmd {
        let amount = parse_amount(&amount)?;
        BudgetService::new(storage).set_amount(amount)?;
        println!("Budget updated successfully!");
        println!();
    }

    let dashboard = DashboardService::new(storage).snapshot(today)?;
    println!("Budget: {}", dashboard.metrics.month.name());
    print!("{}", format_budget(&dashboard, &theme));

    Ok(())
}
