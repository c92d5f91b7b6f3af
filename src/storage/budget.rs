//! Budget repository for JSON storage
//!
//! The monthly budget is a single record in budget.json.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendVistaError;
use crate::models::Budget;

use super::file_io::{read_json_or_default, write_json_atomic};
use super::SCHEMA_VERSION;

/// Serializable budget data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default = "super::schema_version")]
    schema_version: u32,
    #[serde(flatten)]
    budget: Budget,
}

impl Default for BudgetData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            budget: Budget::default(),
        }
    }
}

/// Repository for the budget singleton
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Budget>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Budget::default()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the budget from disk, returning `true` if the file was malformed
    pub fn load(&self) -> Result<bool, SpendVistaError> {
        let loaded = read_json_or_default::<BudgetData, _>(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = loaded.value.budget;

        Ok(loaded.malformed)
    }

    pub fn save(&self) -> Result<(), SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = BudgetData {
            schema_version: SCHEMA_VERSION,
            budget: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self) -> Result<Budget, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Replace the budget wholesale
    pub fn set(&self, budget: Budget) -> Result<(), SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = budget;
        Ok(())
    }
}
