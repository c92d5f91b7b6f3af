//! Emergency fund CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_emergency, Theme};
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::services::{DashboardService, EmergencyService};
use crate::storage::Storage;

use super::parse_amount;

/// Emergency fund subcommands
#[derive(Subcommand)]
pub enum EmergencyCommands {
    /// Show emergency fund progress
    Show,

    /// Change the target and/or the share of each income set aside
    Set {
        /// Savings target (e.g. "30000")
        #[arg(short, long)]
        target: Option<String>,
        /// Percentage of every income added to the fund (0-100)
        #[arg(short, long)]
        allocation: Option<u8>,
    },

    /// Add money to the fund by hand
    Deposit {
        amount: String,
    },

    /// Overwrite the saved balance
    SetSaved {
        amount: String,
    },
}

/// Handle an emergency fund command
pub fn handle_emergency_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: EmergencyCommands,
) -> SpendVistaResult<()> {
    let service = EmergencyService::new(storage);
    let theme = Theme::from_settings(settings);

    match cmd {
        EmergencyCommands::Show => {}

        EmergencyCommands::Set { target, allocation } => {
            if target.is_none() && allocation.is_none() {
                return Err(SpendVistaError::Validation(
                    "Nothing to update: pass --target and/or --allocation".into(),
                ));
            }
            let target = target.as_deref().map(parse_amount).transpose()?;
            service.update_settings(target, allocation)?;
            println!("Emergency fund settings updated!");
            println!();
        }

        EmergencyCommands::Deposit { amount } => {
            let amount = parse_amount(&amount)?;
            service.deposit(amount)?;
            println!("Added {} to your emergency fund.", theme.money(amount));
            println!();
        }

        EmergencyCommands::SetSaved { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_saved(amount)?;
            println!("Emergency fund balance set to {}.", theme.money(amount));
            println!();
        }
    }

    let dashboard = DashboardService::new(storage).snapshot(today)?;
    println!("Emergency fund");
    print!("{}", format_emergency(&dashboard, &theme));

    Ok(())
}
