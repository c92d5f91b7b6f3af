//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Records are
//! kept in insertion order, which the recent-transactions view relies on.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendVistaError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};
use super::SCHEMA_VERSION;

/// Serializable transaction data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default = "super::schema_version")]
    schema_version: u32,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Default for TransactionData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            transactions: Vec::new(),
        }
    }
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load transactions from disk
    ///
    /// Returns `true` when the file was malformed and defaults were used.
    pub fn load(&self) -> Result<bool, SpendVistaError> {
        let loaded = read_json_or_default::<TransactionData, _>(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = loaded.value.transactions;

        Ok(loaded.malformed)
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = TransactionData {
            schema_version: SCHEMA_VERSION,
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Find transactions whose ID matches a full or short identifier
    pub fn find_matching(&self, identifier: &str) -> Result<Vec<Transaction>, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        if let Ok(id) = identifier.trim().parse::<TransactionId>() {
            return Ok(data.iter().filter(|t| t.id == id).cloned().collect());
        }

        Ok(data
            .iter()
            .filter(|t| t.id.matches_short(identifier))
            .cloned()
            .collect())
    }

    /// Append a new transaction, or replace an existing one in place
    pub fn upsert(&self, txn: Transaction) -> Result<(), SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(existing) => *existing = txn,
            None => data.push(txn),
        }
        Ok(())
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data
            .iter()
            .position(|t| t.id == id)
            .map(|index| data.remove(index)))
    }

    /// Remove every transaction
    pub fn clear(&self) -> Result<(), SpendVistaError> {
        let mut data = self.data.write().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();
        Ok(())
    }

    pub fn count(&self) -> Result<usize, SpendVistaError> {
        let data = self.data.read().map_err(|e| {
            SpendVistaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
