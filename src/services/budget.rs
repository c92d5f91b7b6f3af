//! Budget service
//!
//! Sets and reads the monthly spending ceiling.

use crate::audit::{diff_records, EntityType};
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::models::{Budget, Money};
use crate::storage::Storage;

/// Service for the monthly budget
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> SpendVistaResult<Budget> {
        self.storage.budget.get()
    }

    /// Replace the monthly budget; zero clears it
    pub fn set_amount(&self, amount: Money) -> SpendVistaResult<Budget> {
        let before = self.storage.budget.get()?;

        let mut budget = before.clone();
        budget.set_amount(amount);
        budget
            .validate()
            .map_err(|e| SpendVistaError::Validation(e.to_string()))?;

        self.storage.budget.set(budget.clone())?;
        self.storage.budget.save()?;

        self.storage.log_update(
            EntityType::Budget,
            "budget",
            None,
            &before,
            &budget,
            diff_records(&before.amount, &budget.amount)
                .map(|diff| format!("amount: {}", diff)),
        )?;

        Ok(budget)
    }
}
