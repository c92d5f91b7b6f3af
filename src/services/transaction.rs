//! Transaction service
//!
//! Records and removes income/expense transactions. Recording an income is
//! the only place the emergency-fund allocation is applied.

use chrono::NaiveDate;

use crate::audit::{diff_records, EntityType};
use crate::error::{SpendVistaError, SpendVistaResult};
use crate::metrics::{apply_emergency_allocation, recent_transactions};
use crate::models::{EmergencyFund, Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

use super::{require_positive, single_match, DeleteOutcome};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub name: String,
    pub amount: Money,
    pub date: NaiveDate,
}

/// What a successful create produced
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionReceipt {
    pub transaction: Transaction,
    /// Amount moved into the emergency fund, for incomes with a non-zero
    /// allocation
    pub allocated: Option<Money>,
}

struct StagedAllocation {
    before: EmergencyFund,
    after: EmergencyFund,
    amount: Money,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// An income and its emergency-fund allocation are persisted together:
    /// if either file cannot be written, neither change is kept.
    pub fn create(&self, input: CreateTransactionInput) -> SpendVistaResult<TransactionReceipt> {
        require_positive(input.amount, "Transaction amount")?;

        let txn = Transaction::new(input.kind, input.name.trim(), input.amount, input.date);
        txn.validate()
            .map_err(|e| SpendVistaError::Validation(e.to_string()))?;

        let allocation = if txn.is_income() {
            self.stage_allocation(&txn)?
        } else {
            None
        };

        self.storage.transactions.upsert(txn.clone())?;
        if let Err(e) = self.storage.transactions.save() {
            self.storage.transactions.delete(txn.id)?;
            return Err(e);
        }

        if let Some(staged) = &allocation {
            self.storage.emergency.set(staged.after.clone())?;
            if let Err(e) = self.storage.emergency.save() {
                self.storage.emergency.set(staged.before.clone())?;
                self.storage.transactions.delete(txn.id)?;
                self.storage.transactions.save()?;
                return Err(e);
            }
        }

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.name.clone()),
            &txn,
        )?;

        if let Some(staged) = &allocation {
            self.storage.log_update(
                EntityType::EmergencyFund,
                "emergency_fund",
                Some(format!("allocation from {}", txn.name)),
                &staged.before,
                &staged.after,
                diff_records(&staged.before, &staged.after),
            )?;
        }

        Ok(TransactionReceipt {
            transaction: txn,
            allocated: allocation.map(|staged| staged.amount),
        })
    }

    /// Work out the fund after this income's allocation, without saving it
    fn stage_allocation(&self, txn: &Transaction) -> SpendVistaResult<Option<StagedAllocation>> {
        let before = self.storage.emergency.get()?;
        let mut after = before.clone();

        let amount = apply_emergency_allocation(&mut after, txn.amount);
        if amount.is_zero() {
            return Ok(None);
        }

        Ok(Some(StagedAllocation {
            before,
            after,
            amount,
        }))
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> SpendVistaResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> SpendVistaResult<Option<Transaction>> {
        let matches = self.storage.transactions.find_matching(identifier)?;
        single_match(matches, identifier)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> SpendVistaResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// The last `count` transactions, most recent first
    pub fn recent(&self, count: usize) -> SpendVistaResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        Ok(recent_transactions(&all, count).into_iter().cloned().collect())
    }

    /// Delete a transaction
    ///
    /// The emergency fund keeps any allocation the transaction produced.
    pub fn delete(&self, id: TransactionId) -> SpendVistaResult<DeleteOutcome<Transaction>> {
        let txn = match self.storage.transactions.delete(id)? {
            Some(txn) => txn,
            None => return Ok(DeleteOutcome::NotFound(id.to_string())),
        };
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            id.to_string(),
            Some(txn.name.clone()),
            &txn,
        )?;

        Ok(DeleteOutcome::Deleted(txn))
    }

    pub fn count(&self) -> SpendVistaResult<usize> {
        self.storage.transactions.count()
    }
}
