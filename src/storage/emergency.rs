//! Emergency fund repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendVistaError;
use crate::models::EmergencyFund;

use super::file_io::{read_json_or_default, write_json_atomic};
use super::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EmergencyFundData {
    #[serde(default = "super::schema_version")]
    schema_version: u32,
    #[serde(flatten)]
    fund: EmergencyFund,
}

impl Default for EmergencyFundData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            fund: EmergencyFund::default(),
        }
    }
}

/// Repository for the emergency fund singleton
pub struct EmergencyFundRepository {
    path: PathBuf,
    data: RwLock<EmergencyFund>,
}

impl EmergencyFundRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(EmergencyFund::default()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the fund from disk, returning `true` if the file was malformed
    pub fn load(&self) -> Result<bool, SpendVistaError> {
        let loaded = read_json_or_default::<EmergencyFundData, _>(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = loaded.value.fund;

        Ok(loaded.malformed)
    }

    pub fn save(&self) -> Result<(), SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = EmergencyFundData {
            schema_version: SCHEMA_VERSION,
            fund: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self) -> Result<EmergencyFund, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    pub fn set(&self, fund: EmergencyFund) -> Result<(), SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = fund;
        Ok(())
    }
}
