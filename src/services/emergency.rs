//! Emergency fund service
//!
//! Target and allocation settings plus manual balance adjustments. Automatic
//! top-ups from income live in the transaction service.

use crate::audit::{diff_records, EntityType};
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::models::{EmergencyFund, Money};
use crate::storage::Storage;

use super::require_positive;

/// Service for the emergency fund
pub struct EmergencyService<'a> {
    storage: &'a Storage,
}

impl<'a> EmergencyService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> SpendVistaResult<EmergencyFund> {
        self.storage.emergency.get()
    }

    /// Change the savings target and/or the share of income set aside
    pub fn update_settings(
        &self,
        target: Option<Money>,
        allocation: Option<u8>,
    ) -> SpendVistaResult<EmergencyFund> {
        self.modify(|fund| {
            if let Some(target) = target {
                fund.target = target;
            }
            if let Some(allocation) = allocation {
                fund.allocation = allocation;
            }
            Ok(())
        })
    }

    /// Overwrite the saved balance
    pub fn set_saved(&self, amount: Money) -> SpendVistaResult<EmergencyFund> {
        if amount.is_negative() {
            return Err(SpendVistaError::InvalidAmount(format!(
                "Saved amount cannot be negative, got {}",
                amount
            )));
        }
        self.modify(|fund| {
            fund.saved = amount;
            Ok(())
        })
    }

    /// Add a manual deposit to the saved balance
    pub fn deposit(&self, amount: Money) -> SpendVistaResult<EmergencyFund> {
        require_positive(amount, "Deposit")?;
        self.modify(|fund| {
            fund.saved += amount;
            Ok(())
        })
    }

    fn modify<F>(&self, change: F) -> SpendVistaResult<EmergencyFund>
    where
        F: FnOnce(&mut EmergencyFund) -> SpendVistaResult<()>,
    {
        let before = self.storage.emergency.get()?;
        let mut fund = before.clone();
        change(&mut fund)?;

        fund.validate()
            .map_err(|e| SpendVistaError::Validation(e.to_string()))?;

        let diff = diff_records(&before, &fund);
        if diff.is_none() {
            return Ok(fund);
        }

        self.storage.emergency.set(fund.clone())?;
        self.storage.emergency.save()?;

        self.storage.log_update(
            EntityType::EmergencyFund,
            "emergency_fund",
            None,
            &before,
            &fund,
            diff,
        )?;

        Ok(fund)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendVistaPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendVistaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_update_settings() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EmergencyService::new(&storage);

        let fund = service
            .update_settings(Some(Money::from_units(10000)), Some(15))
            .unwrap();
        assert_eq!(fund.target, Money::from_units(10000));
        assert_eq!(fund.allocation, 15);

        // Only the allocation this time
        let fund = service.update_settings(None, Some(20)).unwrap();
        assert_eq!(fund.target, Money::from_units(10000));
        assert_eq!(service.get().unwrap().allocation, 20);
    }

    #[test]
    fn test_rejects_out_of_range_allocation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EmergencyService::new(&storage);

        let err = service.update_settings(None, Some(101)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get().unwrap().allocation, 10);

        let err = service
            .update_settings(Some(Money::from_units(-1)), None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_deposit_and_set_saved() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EmergencyService::new(&storage);

        service.deposit(Money::from_units(250)).unwrap();
        service.deposit(Money::from_units(50)).unwrap();
        assert_eq!(service.get().unwrap().saved, Money::from_units(300));

        service.set_saved(Money::from_units(1000)).unwrap();
        assert_eq!(service.get().unwrap().saved, Money::from_units(1000));

        service.set_saved(Money::zero()).unwrap();
        assert_eq!(service.get().unwrap().saved, Money::zero());
    }

    #[test]
    fn test_rejects_bad_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EmergencyService::new(&storage);

        assert!(service.deposit(Money::zero()).unwrap_err().is_invalid_amount());
        assert!(service
            .set_saved(Money::from_units(-5))
            .unwrap_err()
            .is_invalid_amount());
    }

    #[test]
    fn test_unchanged_update_is_not_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EmergencyService::new(&storage);

        service.update_settings(None, Some(10)).unwrap();
        assert!(storage.audit().read_all().unwrap().is_empty());
    }
}
