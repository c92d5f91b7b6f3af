//! Savings goal repository for JSON storage
//!
//! Manages loading and saving goals to goals.json, in creation order.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendVistaError;
use crate::models::{GoalId, SavingsGoal};

use super::file_io::{read_json_or_default, write_json_atomic};
use super::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GoalData {
    #[serde(default = "super::schema_version")]
    schema_version: u32,
    #[serde(default)]
    goals: Vec<SavingsGoal>,
}

impl Default for GoalData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            goals: Vec::new(),
        }
    }
}

/// Repository for savings goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<Vec<SavingsGoal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load goals from disk, returning `true` if the file was malformed
    pub fn load(&self) -> Result<bool, SpendVistaError> {
        let loaded = read_json_or_default::<GoalData, _>(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = loaded.value.goals;

        Ok(loaded.malformed)
    }

    pub fn save(&self) -> Result<(), SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = GoalData {
            schema_version: SCHEMA_VERSION,
            goals: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: GoalId) -> Result<Option<SavingsGoal>, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.iter().find(|g| g.id == id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Get a goal by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<SavingsGoal>, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let name_lower = name.trim().to_lowercase();
        Ok(data
            .iter()
            .find(|g| g.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Find goals whose ID matches a full or short identifier
    pub fn find_matching(&self, identifier: &str) -> Result<Vec<SavingsGoal>, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        if let Ok(id) = identifier.trim().parse::<GoalId>() {
            return Ok(data.iter().filter(|g| g.id == id).cloned().collect());
        }

        Ok(data
            .iter()
            .filter(|g| g.id.matches_short(identifier))
            .cloned()
            .collect())
    }

    /// Insert a goal or replace an existing one in place
    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => *existing = goal,
            None => data.push(goal),
        }
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> Result<Option<SavingsGoal>, SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data
            .iter()
            .position(|g| g.id == id)
            .map(|index| data.remove(index)))
    }

    pub fn clear(&self) -> Result<(), SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();
        Ok(())
    }
}
