//! Storage layer for SpendVista
//!
//! One JSON file per record kind, atomic writes, automatic directory
//! creation, plus the audit logger every mutation reports to.

pub mod budget;
pub mod emergency;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use budget::BudgetRepository;
pub use emergency::EmergencyFundRepository;
pub use file_io::{read_json_or_default, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;

use std::path::PathBuf;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, Change, EntityType, RecordRef, ResetSummary};
use crate::config::paths::SpendVistaPaths;
use crate::error::SpendVistaError;
use crate::models::{Budget, EmergencyFund};

/// Current on-disk schema version for data files
pub const SCHEMA_VERSION: u32 = 1;

pub(crate) fn schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Files that could not be parsed during `load_all` and were replaced by
/// their defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub malformed: Vec<PathBuf>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendVistaPaths,
    audit: AuditLogger,
    pub transactions: TransactionRepository,
    pub budget: BudgetRepository,
    pub emergency: EmergencyFundRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendVistaPaths) -> Result<Self, SpendVistaError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            emergency: EmergencyFundRepository::new(paths.emergency_fund_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &SpendVistaPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    ///
    /// Malformed files never fail the load; they are listed in the report.
    pub fn load_all(&mut self) -> Result<LoadReport, SpendVistaError> {
        let mut report = LoadReport::default();

        if self.transactions.load()? {
            report.malformed.push(self.transactions.path().clone());
        }
        if self.budget.load()? {
            report.malformed.push(self.budget.path().clone());
        }
        if self.emergency.load()? {
            report.malformed.push(self.emergency.path().clone());
        }
        if self.goals.load()? {
            report.malformed.push(self.goals.path().clone());
        }

        Ok(report)
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SpendVistaError> {
        self.transactions.save()?;
        self.budget.save()?;
        self.emergency.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Restore every record to its default and persist
    ///
    /// Settings and the audit log are left untouched.
    pub fn reset(&self) -> Result<ResetSummary, SpendVistaError> {
        let cleared = ResetSummary {
            transactions: self.transactions.count()?,
            goals: self.goals.get_all()?.len(),
            budget: self.budget.get()?.amount,
            emergency_saved: self.emergency.get()?.saved,
        };

        self.transactions.clear()?;
        self.goals.clear()?;
        self.budget.set(Budget::default())?;
        self.emergency.set(EmergencyFund::default())?;
        self.save_all()?;

        self.audit.log(&AuditEntry::now(Change::Reset { cleared }))?;
        Ok(cleared)
    }

    /// Check if storage has been initialized (has a settings file)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        entity: &T,
    ) -> Result<(), SpendVistaError> {
        let record = RecordRef::new(entity_type, entity_id, label);
        self.audit.log(&AuditEntry::now(Change::created(record, entity)?))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
        diff: Option<String>,
    ) -> Result<(), SpendVistaError> {
        let record = RecordRef::new(entity_type, entity_id, label);
        let change = Change::updated(record, before, after, diff)?;
        self.audit.log(&AuditEntry::now(change))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        entity: &T,
    ) -> Result<(), SpendVistaError> {
        let record = RecordRef::new(entity_type, entity_id, label);
        self.audit.log(&AuditEntry::now(Change::deleted(record, entity)?))
    }
}
