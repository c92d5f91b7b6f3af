use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use spendvista::cli::{
    handle_audit_command, handle_budget_command, handle_dashboard_command,
    handle_emergency_command, handle_goal_command, handle_report_command,
    handle_settings_command, handle_transaction_command,
};
use spendvista::config::{paths::SpendVistaPaths, settings::Settings};
use spendvista::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendvista",
    version,
    about = "Local-first personal finance tracker",
    long_about = "SpendVista tracks income and expenses against a monthly budget, \
                  sets aside a share of every income for an emergency fund and \
                  follows progress toward your savings goals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show balance, this month's totals and recent transactions
    Dashboard {
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(spendvista::cli::TransactionCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(spendvista::cli::BudgetCommands),

    /// Emergency fund commands
    #[command(subcommand)]
    Emergency(spendvista::cli::EmergencyCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(spendvista::cli::GoalCommands),

    /// Income vs expenses and spending by category for this month
    Report,

    /// Display settings
    #[command(subcommand)]
    Settings(spendvista::cli::SettingsCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete all transactions and goals and restore defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let paths = SpendVistaPaths::new()?;
    let loaded_settings = Settings::load_or_create(&paths)?;
    if loaded_settings.malformed {
        eprintln!(
            "Warning: {} could not be read; using defaults.",
            paths.settings_file().display()
        );
    }
    if let Some(format) = &loaded_settings.rejected_date_format {
        eprintln!(
            "Warning: date format '{}' in {} is not usable; using %Y-%m-%d.",
            format,
            paths.settings_file().display()
        );
    }
    let settings = loaded_settings.settings;

    let mut storage = Storage::new(paths.clone())?;
    let report = storage.load_all()?;
    for path in &report.malformed {
        eprintln!(
            "Warning: {} could not be read; using defaults.",
            path.display()
        );
    }

    match cli.command {
        None => handle_dashboard_command(&storage, &settings, today, false)?,
        Some(Commands::Dashboard { json }) => {
            handle_dashboard_command(&storage, &settings, today, json)?
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, today, cmd)?
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, today, cmd)?,
        Some(Commands::Emergency(cmd)) => {
            handle_emergency_command(&storage, &settings, today, cmd)?
        }
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Report) => handle_report_command(&storage, &settings, today)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, &settings, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Reset { force }) => {
            if !force {
                println!("WARNING: This will delete all transactions and savings goals");
                println!("and reset the budget and emergency fund. This cannot be undone.");
                println!("To proceed, run again with --force flag:");
                println!("  spendvista reset --force");
                return Ok(());
            }
            let cleared = storage.reset()?;
            println!("All data has been reset.");
            println!(
                "Removed {} transactions and {} savings goals.",
                cleared.transactions, cleared.goals
            );
        }
        Some(Commands::Init) => {
            println!("Initializing SpendVista at: {}", paths.base_dir().display());
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  spendvista budget set 5000");
            println!("  spendvista emergency set --target 30000 --allocation 10");
            println!("  spendvista transaction add income Salary 25000");
        }
        Some(Commands::Config) => {
            println!("SpendVista Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Dark mode:       {}", settings.dark_mode);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent count:    {}", settings.recent_count);
        }
    }

    Ok(())
}
