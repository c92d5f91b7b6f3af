//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_table, Theme};
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::models::TransactionKind;
use crate::services::{
    CreateTransactionInput, DeleteOutcome, EmergencyService, TransactionService,
};
use crate::storage::Storage;

use super::{parse_amount, parse_date};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or an expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Description; its first word is used as the expense category
        name: String,
        /// Amount (e.g. "150" or "150.00")
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, most recent first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (e.g. txn-1a2b3c4d)
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> SpendVistaResult<()> {
    let service = TransactionService::new(storage);
    let theme = Theme::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            kind,
            name,
            amount,
            date,
        } => {
            let kind: TransactionKind = kind.parse().map_err(SpendVistaError::Validation)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };

            let receipt = service.create(CreateTransactionInput {
                kind,
                name,
                amount,
                date,
            })?;

            println!("Transaction added successfully!");
            println!("  {}", receipt.transaction);
            println!("  ID: {}", receipt.transaction.id);

            if let Some(allocated) = receipt.allocated {
                let fund = EmergencyService::new(storage).get()?;
                println!(
                    "Added {} to your emergency fund ({}% of income).",
                    theme.money(allocated),
                    fund.allocation
                );
            }
        }

        TransactionCommands::List { limit } => {
            let transactions = service.recent(limit.unwrap_or(usize::MAX))?;
            println!("{}", format_transaction_table(&transactions, &theme));
            if !transactions.is_empty() {
                println!("{} transaction(s)", transactions.len());
            }
        }

        TransactionCommands::Delete { id, force } => {
            let txn = match service.find(&id)? {
                Some(txn) => txn,
                None => {
                    println!("No transaction matches '{}'. Nothing deleted.", id);
                    return Ok(());
                }
            };

            if !force {
                println!("About to delete: {}", txn);
                println!("To proceed, run again with --force flag:");
                println!("  spendvista transaction delete {} --force", id);
                return Ok(());
            }

            match service.delete(txn.id)? {
                DeleteOutcome::Deleted(txn) => println!("Deleted transaction: {}", txn),
                DeleteOutcome::NotFound(id) => {
                    println!("No transaction matches '{}'. Nothing deleted.", id)
                }
            }
        }
    }

    Ok(())
}
