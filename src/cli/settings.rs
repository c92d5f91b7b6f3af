//! Settings CLI commands

use clap::{Subcommand, ValueEnum};

use crate::audit::{diff_records, EntityType};
use crate::config::settings::Settings;
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::storage::Storage;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Turn coloured output on or off
    DarkMode {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Set the currency symbol used in output
    Currency {
        symbol: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SettingsCommands,
) -> SpendVistaResult<()> {
    let mut updated = settings.clone();

    match cmd {
        SettingsCommands::Show => {
            print_settings(settings);
            return Ok(());
        }
        SettingsCommands::DarkMode { state } => {
            updated.dark_mode = matches!(state, Toggle::On);
        }
        SettingsCommands::Currency { symbol } => {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(SpendVistaError::Validation(
                    "Currency symbol cannot be empty".into(),
                ));
            }
            updated.currency_symbol = symbol.to_string();
        }
    }

    updated.save(storage.paths())?;
    storage.log_update(
        EntityType::Settings,
        "settings",
        None,
        settings,
        &updated,
        diff_records(settings, &updated),
    )?;

    println!("Settings updated.");
    print_settings(&updated);
    Ok(())
}

fn print_settings(settings: &Settings) {
    println!("Dark mode:        {}", if settings.dark_mode { "on" } else { "off" });
    println!("Currency symbol:  {}", settings.currency_symbol);
    println!("Date format:      {}", settings.date_format);
    println!("Recent count:     {}", settings.recent_count);
}
