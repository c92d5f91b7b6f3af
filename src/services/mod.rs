//! Service layer for SpendVista
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the one-shot emergency allocation, persistence and
//! audit logging. Metrics are never stored; the dashboard service derives
//! them from the current record set on every call.

pub mod budget;
pub mod dashboard;
pub mod emergency;
pub mod goal;
pub mod transaction;

pub use budget::BudgetService;
pub use dashboard::{Dashboard, DashboardService};
pub use emergency::EmergencyService;
pub use goal::GoalService;
pub use transaction::{CreateTransactionInput, TransactionReceipt, TransactionService};

use crate::error::{SpendVistaError, SpendVistaResult};
use crate::models::Money;

/// Result of a delete request
///
/// Deleting an unknown record is a reported no-op rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome<T> {
    Deleted(T),
    NotFound(String),
}

impl<T> DeleteOutcome<T> {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}

/// Narrow a list of ID matches down to a single record
fn single_match<T>(mut matches: Vec<T>, identifier: &str) -> SpendVistaResult<Option<T>> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        n => Err(SpendVistaError::Validation(format!(
            "'{}' matches {} records; use a longer ID",
            identifier, n
        ))),
    }
}

/// Reject amounts that are zero, negative or above `Money::MAX`
fn require_positive(amount: Money, what: &str) -> SpendVistaResult<()> {
    if !amount.is_positive() {
        return Err(SpendVistaError::InvalidAmount(format!(
            "{} must be greater than zero, got {}",
            what, amount
        )));
    }
    if amount > Money::MAX {
        return Err(SpendVistaError::InvalidAmount(format!(
            "{} exceeds the maximum of {}",
            what,
            Money::MAX
        )));
    }
    Ok(())
}
