//! Display formatting for terminal output
//!
//! Turns engine output into text: tables, progress bars, charts and the
//! budget/emergency status messages. Colour is applied only in dark mode.

pub mod dashboard;
pub mod format;
pub mod goal;
pub mod status;
pub mod transaction;

pub use dashboard::{format_budget, format_dashboard, format_emergency, format_report};
pub use format::{format_percentage, progress_bar, Theme, Tone};
pub use goal::{format_goal_details, format_goal_list};
pub use status::{budget_message, emergency_message};
pub use transaction::{format_transaction_short, format_transaction_table};
