//! Metrics engine
//!
//! Pure functions that derive dashboard values from the raw record set:
//! monthly and all-time sums, balance, budget and savings progress, the
//! expense breakdown by category and chart data.
//!
//! Every function takes plain records plus an explicit reference date. The
//! engine never reads the clock, never touches storage and never formats
//! output. The single mutation, [`apply_emergency_allocation`], belongs to
//! the moment an income is recorded and is called from the transaction
//! service only.

pub mod allocation;
pub mod category;
pub mod goals;
pub mod month;
pub mod status;
pub mod summary;

pub use allocation::apply_emergency_allocation;
pub use category::{categorize_expenses, category_label, CategoryTotal, FALLBACK_CATEGORY};
pub use goals::{goal_progress, GoalProgress};
pub use month::MonthRef;
pub use status::{BudgetStatus, SavingsStatus};
pub use summary::{
    compute_metrics, emergency_remaining, income_expense_chart, progress_width,
    recent_transactions, ChartBar, Metrics,
};
