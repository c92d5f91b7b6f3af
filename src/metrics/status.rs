//! Threshold classification for the budget and the emergency fund

use serde::Serialize;
use std::fmt;

/// Share of the budget at which spending is flagged
pub const BUDGET_WARNING_PERCENT: f64 = 80.0;

/// Share of the budget at which the budget counts as blown
pub const BUDGET_EXCEEDED_PERCENT: f64 = 100.0;

/// Budget health for the reference month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    /// No budget set (amount is zero)
    Unset,
    OnTrack,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    /// Classify a budget from its amount and usage percentage
    pub fn classify(budget_is_set: bool, percentage: f64) -> Self {
        if !budget_is_set {
            Self::Unset
        } else if percentage >= BUDGET_EXCEEDED_PERCENT {
            Self::Exceeded
        } else if percentage >= BUDGET_WARNING_PERCENT {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::OnTrack => write!(f, "on-track"),
            Self::Warning => write!(f, "warning"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Progress toward a savings target (emergency fund or goal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SavingsStatus {
    /// No target set
    Unset,
    InProgress,
    Complete,
}

impl SavingsStatus {
    pub fn classify(target_is_set: bool, percentage: f64) -> Self {
        if !target_is_set {
            Self::Unset
        } else if percentage >= 100.0 {
            Self::Complete
        } else {
            Self::InProgress
        }
    }
}

impl fmt::Display for SavingsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Complete => write!(f, "complete"),
        }
    }
}
