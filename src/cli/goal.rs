//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_details, format_goal_list, Theme};
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::metrics::goal_progress;
use crate::models::SavingsGoal;
use crate::services::{DeleteOutcome, GoalService};
use crate::storage::Storage;

use super::parse_amount;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
    },

    /// List all goals with progress
    List,

    /// Show one goal
    Show {
        /// Goal name or ID
        goal: String,
    },

    /// Add money to a goal
    Contribute {
        /// Goal name or ID
        goal: String,
        /// Amount to add
        amount: String,
    },

    /// Delete a goal
    Delete {
        /// Goal name or ID
        goal: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> SpendVistaResult<()> {
    let service = GoalService::new(storage);
    let theme = Theme::from_settings(settings);

    match cmd {
        GoalCommands::Add { name, target } => {
            let target = parse_amount(&target)?;
            let goal = service.create(&name, target)?;
            println!("Savings goal created successfully!");
            println!("  {} ({})", goal.name, goal.id);
        }

        GoalCommands::List => {
            let progress: Vec<_> = service.list()?.iter().map(goal_progress).collect();
            println!("{}", format_goal_list(&progress, &theme));
        }

        GoalCommands::Show { goal } => {
            let goal = require_goal(&service, &goal)?;
            println!("{}", format_goal_details(&goal_progress(&goal), &theme));
        }

        GoalCommands::Contribute { goal, amount } => {
            let amount = parse_amount(&amount)?;
            let goal = require_goal(&service, &goal)?;
            let goal = service.contribute(goal.id, amount)?;
            println!("Added {} to {}", theme.money(amount), goal.name);
            println!("{}", format_goal_details(&goal_progress(&goal), &theme));
        }

        GoalCommands::Delete { goal: identifier, force } => {
            let goal = match service.find(&identifier)? {
                Some(goal) => goal,
                None => {
                    println!("No goal matches '{}'. Nothing deleted.", identifier);
                    return Ok(());
                }
            };

            if !force {
                println!(
                    "About to delete goal '{}' with {} saved.",
                    goal.name,
                    theme.money(goal.saved)
                );
                println!("To proceed, run again with --force flag:");
                println!("  spendvista goal delete {} --force", identifier);
                return Ok(());
            }

            match service.delete(goal.id)? {
                DeleteOutcome::Deleted(goal) => println!("Deleted goal: {}", goal.name),
                DeleteOutcome::NotFound(id) => {
                    println!("No goal matches '{}'. Nothing deleted.", id)
                }
            }
        }
    }

    Ok(())
}

fn require_goal(service: &GoalService, identifier: &str) -> SpendVistaResult<SavingsGoal> {
    service
        .find(identifier)?
        .ok_or_else(|| SpendVistaError::goal_not_found(identifier))
}
