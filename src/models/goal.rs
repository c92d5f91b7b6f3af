//! Savings goal model
//!
//! A named savings target funded by discrete contributions, independent of
//! the budget and the emergency fund.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A named savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target: Money,
    #[serde(default)]
    pub saved: Money,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target: Money) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            saved: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Add a contribution to the goal
    pub fn contribute(&mut self, amount: Money) {
        self.saved += amount;
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }
        if self.saved.is_negative() {
            return Err(GoalValidationError::NegativeSaved);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} of {}", self.name, self.saved, self.target)
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeSaved,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be positive, got {}", target)
            }
            Self::NegativeSaved => write!(f, "Goal balance cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal() {
        let goal = SavingsGoal::new("Holiday", Money::from_units(2000));
        assert_eq!(goal.saved, Money::zero());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_contribute() {
        let mut goal = SavingsGoal::new("Holiday", Money::from_units(2000));
        goal.contribute(Money::from_units(1500));
        goal.contribute(Money::from_units(500));
        assert_eq!(goal.saved, Money::from_units(2000));
    }

    #[test]
    fn test_validation() {
        let goal = SavingsGoal::new("Car", Money::zero());
        assert_eq!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(Money::zero()))
        );

        let unnamed = SavingsGoal::new("", Money::from_units(10));
        assert_eq!(unnamed.validate(), Err(GoalValidationError::EmptyName));
    }
}
