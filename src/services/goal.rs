//! Savings goal service
//!
//! Creates goals, records contributions and removes goals. Goals are
//! independent of the budget and the emergency fund.

use crate::audit::EntityType;
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::models::{GoalId, Money, SavingsGoal};
use crate::storage::Storage;

use super::{require_positive, single_match, DeleteOutcome};

/// Service for savings goals
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new savings goal with nothing saved yet
    pub fn create(&self, name: &str, target: Money) -> SpendVistaResult<SavingsGoal> {
        require_positive(target, "Goal target")?;

        let goal = SavingsGoal::new(name.trim(), target);
        goal.validate()
            .map_err(|e| SpendVistaError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Add money to a goal
    pub fn contribute(&self, id: GoalId, amount: Money) -> SpendVistaResult<SavingsGoal> {
        require_positive(amount, "Contribution")?;

        let before = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| SpendVistaError::goal_not_found(id.to_string()))?;

        let mut goal = before.clone();
        goal.contribute(amount);

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
            Some(format!(
                "saved: {} -> {}",
                before.saved.cents(),
                goal.saved.cents()
            )),
        )?;

        Ok(goal)
    }

    /// Delete a goal and whatever it had saved
    pub fn delete(&self, id: GoalId) -> SpendVistaResult<DeleteOutcome<SavingsGoal>> {
        let goal = match self.storage.goals.delete(id)? {
            Some(goal) => goal,
            None => return Ok(DeleteOutcome::NotFound(id.to_string())),
        };
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::SavingsGoal,
            id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(DeleteOutcome::Deleted(goal))
    }

    pub fn get(&self, id: GoalId) -> SpendVistaResult<Option<SavingsGoal>> {
        self.storage.goals.get(id)
    }

    /// All goals in creation order
    pub fn list(&self) -> SpendVistaResult<Vec<SavingsGoal>> {
        self.storage.goals.get_all()
    }

    /// Find a goal by name or ID string
    pub fn find(&self, identifier: &str) -> SpendVistaResult<Option<SavingsGoal>> {
        if let Some(goal) = self.storage.goals.get_by_name(identifier)? {
            return Ok(Some(goal));
        }

        let matches = self.storage.goals.find_matching(identifier)?;
        single_match(matches, identifier)
    }
}
