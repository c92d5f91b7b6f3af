//! Emergency fund allocation
//!
//! The only engine operation with a side effect. It is tied to the creation
//! of an income transaction and must run exactly once per such transaction;
//! the saved balance is never rebuilt from transaction history.

use crate::models::{EmergencyFund, Money};

/// Move `allocation`% of a new income into the emergency fund
///
/// Returns the amount added to `fund.saved`, zero when the allocation is
/// disabled.
pub fn apply_emergency_allocation(fund: &mut EmergencyFund, income: Money) -> Money {
    if fund.allocation == 0 || !income.is_positive() {
        return Money::zero();
    }

    let allocated = income.percent(fund.allocation.min(100));
    fund.saved += allocated;
    allocated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_percent_of_thousand() {
        let mut fund = EmergencyFund::default();
        let added = apply_emergency_allocation(&mut fund, Money::from_units(1000));

        assert_eq!(added, Money::from_units(100));
        assert_eq!(fund.saved, Money::from_units(100));
    }

    #[test]
    fn test_disabled_allocation() {
        let mut fund = EmergencyFund {
            allocation: 0,
            ..EmergencyFund::default()
        };
        let added = apply_emergency_allocation(&mut fund, Money::from_units(1000));

        assert!(added.is_zero());
        assert!(fund.saved.is_zero());
    }

    #[test]
    fn test_repeated_allocations_do_not_drift() {
        let mut fund = EmergencyFund::default();
        for _ in 0..1000 {
            apply_emergency_allocation(&mut fund, Money::from_cents(1010));
        }
        // 10.10 * 10% = 1.01 exactly, a thousand times
        assert_eq!(fund.saved, Money::from_units(1010));
    }

    #[test]
    fn test_rounds_to_nearest_cent() {
        let mut fund = EmergencyFund {
            allocation: 15,
            ..EmergencyFund::default()
        };
        // 33.33 * 15% = 4.9995 -> 5.00
        let added = apply_emergency_allocation(&mut fund, Money::from_cents(3333));
        assert_eq!(added, Money::from_cents(500));
    }
}
