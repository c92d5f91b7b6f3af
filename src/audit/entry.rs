//! Audit log entries
//!
//! An entry pairs a timestamp with a [`Change`]. Record-level changes name
//! the record they touched and carry JSON snapshots; a reset touches every
//! record at once and carries a summary of what it cleared instead.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SpendVistaError, SpendVistaResult};
use crate::models::Money;

/// Kinds of record the audit log knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Transaction,
    Budget,
    EmergencyFund,
    SavingsGoal,
    Settings,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Transaction => "transaction",
            EntityType::Budget => "budget",
            EntityType::EmergencyFund => "emergency fund",
            EntityType::SavingsGoal => "savings goal",
            EntityType::Settings => "settings",
        })
    }
}

/// The record a change applied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    pub entity_type: EntityType,
    /// Record ID; singletons use a fixed key such as `budget`
    pub id: String,
    /// Name shown next to the ID, e.g. the goal or transaction name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RecordRef {
    pub fn new(entity_type: EntityType, id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            entity_type,
            id: id.into(),
            label,
        }
    }
}

/// What a reset threw away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetSummary {
    pub transactions: usize,
    pub goals: usize,
    pub budget: Money,
    pub emergency_saved: Money,
}

/// Operation tag of a change, for filtering and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Reset,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
            Operation::Reset => "reset",
        })
    }
}

/// A single audited change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Change {
    Create {
        record: RecordRef,
        after: Value,
    },
    Update {
        record: RecordRef,
        before: Value,
        after: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diff: Option<String>,
    },
    Delete {
        record: RecordRef,
        before: Value,
    },
    Reset {
        cleared: ResetSummary,
    },
}

impl Change {
    pub fn created<T: Serialize>(record: RecordRef, after: &T) -> SpendVistaResult<Self> {
        Ok(Self::Create {
            record,
            after: snapshot(after)?,
        })
    }

    pub fn updated<T: Serialize>(
        record: RecordRef,
        before: &T,
        after: &T,
        diff: Option<String>,
    ) -> SpendVistaResult<Self> {
        Ok(Self::Update {
            record,
            before: snapshot(before)?,
            after: snapshot(after)?,
            diff,
        })
    }

    pub fn deleted<T: Serialize>(record: RecordRef, before: &T) -> SpendVistaResult<Self> {
        Ok(Self::Delete {
            record,
            before: snapshot(before)?,
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Change::Create { .. } => Operation::Create,
            Change::Update { .. } => Operation::Update,
            Change::Delete { .. } => Operation::Delete,
            Change::Reset { .. } => Operation::Reset,
        }
    }
}

fn snapshot<T: Serialize>(value: &T) -> SpendVistaResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| SpendVistaError::Json(format!("Failed to snapshot record: {}", e)))
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub change: Change,
}

impl AuditEntry {
    /// Stamp a change with the current time
    pub fn now(change: Change) -> Self {
        Self {
            timestamp: Utc::now(),
            change,
        }
    }

    pub fn operation(&self) -> Operation {
        self.change.operation()
    }

    /// The record this entry is about; `None` for a reset
    pub fn record(&self) -> Option<&RecordRef> {
        match &self.change {
            Change::Create { record, .. }
            | Change::Update { record, .. }
            | Change::Delete { record, .. } => Some(record),
            Change::Reset { .. } => None,
        }
    }

    pub fn diff(&self) -> Option<&str> {
        match &self.change {
            Change::Update { diff, .. } => diff.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  ", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?;

        match &self.change {
            Change::Reset { cleared } => write!(
                f,
                "reset all data: {} transactions and {} goals removed, budget {} and \
                 emergency savings {} cleared",
                cleared.transactions, cleared.goals, cleared.budget, cleared.emergency_saved
            ),
            change => {
                if let Some(record) = self.record() {
                    write!(f, "{} {} {}", record.entity_type, record.id, change.operation())?;
                    if let Some(label) = &record.label {
                        write!(f, " ({})", label)?;
                    }
                }
                if let Some(diff) = self.diff() {
                    write!(f, "\n    {}", diff)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn goal_ref() -> RecordRef {
        RecordRef::new(
            EntityType::SavingsGoal,
            "goal-12345678",
            Some("Holiday".to_string()),
        )
    }

    #[test]
    fn test_record_changes_keep_snapshots() {
        let created = Change::created(goal_ref(), &json!({"target": 200000})).unwrap();
        assert_eq!(created.operation(), Operation::Create);

        let entry = AuditEntry::now(Change::deleted(goal_ref(), &json!({"saved": 500})).unwrap());
        assert_eq!(entry.operation(), Operation::Delete);
        assert_eq!(entry.record(), Some(&goal_ref()));
        assert_eq!(entry.diff(), None);
        match entry.change {
            Change::Delete { before, .. } => assert_eq!(before["saved"], 500),
            other => panic!("unexpected change {:?}", other),
        }
    }

    #[test]
    fn test_reset_has_no_record() {
        let entry = AuditEntry::now(Change::Reset {
            cleared: ResetSummary {
                transactions: 3,
                goals: 1,
                budget: Money::from_units(500),
                emergency_saved: Money::from_units(100),
            },
        });

        assert_eq!(entry.operation(), Operation::Reset);
        assert!(entry.record().is_none());

        let text = entry.to_string();
        assert!(text.contains("reset all data: 3 transactions and 1 goals removed"));
        assert!(text.contains("budget 500.00"));
    }

    #[test]
    fn test_serialized_shape() {
        let entry = AuditEntry::now(Change::Reset {
            cleared: ResetSummary {
                transactions: 2,
                goals: 0,
                budget: Money::zero(),
                emergency_saved: Money::from_cents(10000),
            },
        });

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["change"]["operation"], "reset");
        assert_eq!(value["change"]["cleared"]["emergency_saved"], 10000);

        let back: AuditEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_update_display_shows_diff() {
        let entry = AuditEntry::now(
            Change::updated(
                RecordRef::new(EntityType::Budget, "budget", None),
                &json!({"amount": 100000}),
                &json!({"amount": 120000}),
                Some("amount: 100000 -> 120000".to_string()),
            )
            .unwrap(),
        );

        let text = entry.to_string();
        assert!(text.contains("budget budget updated"));
        assert!(text.ends_with("\n    amount: 100000 -> 120000"));
        assert_eq!(
            serde_json::to_value(EntityType::EmergencyFund).unwrap(),
            "emergency_fund"
        );
    }
}
