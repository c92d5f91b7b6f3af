//! Savings goal progress

use serde::Serialize;

use super::status::SavingsStatus;
use crate::models::{GoalId, Money, SavingsGoal};

/// Progress of a single savings goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub name: String,
    pub saved: Money,
    pub target: Money,
    /// Raw percentage, may exceed 100
    pub percentage: f64,
    /// Amount still needed, never negative
    pub remaining: Money,
    pub status: SavingsStatus,
}

pub fn goal_progress(goal: &SavingsGoal) -> GoalProgress {
    let percentage = goal.saved.percentage_of(goal.target);
    GoalProgress {
        goal_id: goal.id,
        name: goal.name.clone(),
        saved: goal.saved,
        target: goal.target,
        percentage,
        remaining: (goal.target - goal.saved).non_negative(),
        status: SavingsStatus::classify(goal.target.is_positive(), percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_reaches_target() {
        let mut goal = SavingsGoal::new("Laptop", Money::from_units(2000));
        goal.saved = Money::from_units(1500);
        goal.contribute(Money::from_units(500));

        let progress = goal_progress(&goal);
        assert_eq!(progress.saved, Money::from_units(2000));
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.status, SavingsStatus::Complete);
        assert_eq!(progress.remaining, Money::zero());
    }

    #[test]
    fn test_partial_progress() {
        let mut goal = SavingsGoal::new("Holiday", Money::from_units(4000));
        goal.saved = Money::from_units(1000);

        let progress = goal_progress(&goal);
        assert_eq!(progress.percentage, 25.0);
        assert_eq!(progress.status, SavingsStatus::InProgress);
        assert_eq!(progress.remaining, Money::from_units(3000));
    }

    #[test]
    fn test_zero_target_is_zero_percent() {
        let goal = SavingsGoal::new("Broken", Money::zero());
        let progress = goal_progress(&goal);
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.status, SavingsStatus::Unset);
    }
}
