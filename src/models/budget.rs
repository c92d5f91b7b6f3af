//! Monthly budget model
//!
//! A single spending ceiling for the current month. Updates overwrite it
//! wholesale; there is no per-month history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The monthly spending ceiling
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    /// Amount available to spend this month (0 means unset)
    #[serde(default)]
    pub amount: Money,

    /// When the budget was last changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Budget {
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            updated_at: Some(Utc::now()),
        }
    }

    /// Check whether a budget has been set
    pub fn is_set(&self) -> bool {
        self.amount.is_positive()
    }

    /// Replace the budget amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Some(Utc::now());
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monthly budget: {}", self.amount)
    }
}

/// Validation errors for the budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
