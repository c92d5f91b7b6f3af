//! Emergency fund model
//!
//! A savings pool with a target, an accumulated balance and an allocation
//! percentage that is skimmed off every income transaction when it is
//! recorded.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Allocation percentage used when nothing has been configured
pub const DEFAULT_ALLOCATION: u8 = 10;

/// Emergency fund settings and balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFund {
    /// Amount the user wants to have saved (0 means unset)
    #[serde(default)]
    pub target: Money,

    /// Amount saved so far
    #[serde(default)]
    pub saved: Money,

    /// Percentage (0-100) of each income added to `saved`
    #[serde(default = "default_allocation")]
    pub allocation: u8,
}

fn default_allocation() -> u8 {
    DEFAULT_ALLOCATION
}

impl Default for EmergencyFund {
    fn default() -> Self {
        Self {
            target: Money::zero(),
            saved: Money::zero(),
            allocation: DEFAULT_ALLOCATION,
        }
    }
}

impl EmergencyFund {
    pub fn new(target: Money, allocation: u8) -> Self {
        Self {
            target,
            saved: Money::zero(),
            allocation,
        }
    }

    /// Check whether a target has been set
    pub fn has_target(&self) -> bool {
        self.target.is_positive()
    }

    /// Validate the fund
    pub fn validate(&self) -> Result<(), EmergencyFundValidationError> {
        if self.target.is_negative() {
            return Err(EmergencyFundValidationError::NegativeTarget);
        }
        if self.saved.is_negative() {
            return Err(EmergencyFundValidationError::NegativeSaved);
        }
        if self.allocation > 100 {
            return Err(EmergencyFundValidationError::AllocationOutOfRange(self.allocation));
        }
        Ok(())
    }
}

impl fmt::Display for EmergencyFund {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Emergency fund: {} of {} ({}% of income)",
            self.saved, self.target, self.allocation
        )
    }
}

/// Validation errors for the emergency fund
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmergencyFundValidationError {
    NegativeTarget,
    NegativeSaved,
    AllocationOutOfRange(u8),
}

impl fmt::Display for EmergencyFundValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeTarget => write!(f, "Emergency fund target cannot be negative"),
            Self::NegativeSaved => write!(f, "Emergency fund balance cannot be negative"),
            Self::AllocationOutOfRange(pct) => {
                write!(f, "Allocation must be between 0 and 100 percent, got {}", pct)
            }
        }
    }
}

impl std::error::Error for EmergencyFundValidationError {}
