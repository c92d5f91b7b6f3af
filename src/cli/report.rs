//! Dashboard and report commands

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::{format_dashboard, format_report, Theme};
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::services::DashboardService;
use crate::storage::Storage;

/// Print the dashboard, or the raw snapshot as JSON
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    json: bool,
) -> SpendVistaResult<()> {
    let dashboard = DashboardService::new(storage)
        .with_recent_count(settings.recent_count)
        .snapshot(today)?;

    if json {
        let output = serde_json::to_string_pretty(&dashboard)
            .map_err(|e| SpendVistaError::Json(format!("Failed to serialize dashboard: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    print!("{}", format_dashboard(&dashboard, &Theme::from_settings(settings)));
    Ok(())
}

/// Print the income/expense chart and category breakdown for this month
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
) -> SpendVistaResult<()> {
    let dashboard = DashboardService::new(storage).snapshot(today)?;
    print!("{}", format_report(&dashboard, &Theme::from_settings(settings)));
    Ok(())
}
