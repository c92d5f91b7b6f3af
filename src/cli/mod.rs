//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod emergency;
pub mod goal;
pub mod report;
pub mod settings;
pub mod transaction;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use emergency::{handle_emergency_command, EmergencyCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_dashboard_command, handle_report_command};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{SpendVistaError, SpendVistaResult};
use crate::models::money::MoneyParseError;
use crate::models::Money;

/// Parse a user-supplied amount such as "150", "R1,250.50" or ".5"
pub fn parse_amount(input: &str) -> SpendVistaResult<Money> {
    Money::parse(input).map_err(|e| match e {
        MoneyParseError::TooLarge(_) => SpendVistaError::InvalidAmount(e.to_string()),
        MoneyParseError::InvalidFormat(_) => {
            SpendVistaError::InvalidAmount(format!("'{}' is not a valid amount", input.trim()))
        }
    })
}

/// Parse a date in YYYY-MM-DD form
pub fn parse_date(input: &str) -> SpendVistaResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        SpendVistaError::InvalidDate(format!("'{}' (expected YYYY-MM-DD)", input.trim()))
    })
}
