//! Core data models for SpendVista
//!
//! Transactions, the monthly budget, the emergency fund and savings goals.

pub mod budget;
pub mod emergency;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::Budget;
pub use emergency::EmergencyFund;
pub use goal::SavingsGoal;
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
