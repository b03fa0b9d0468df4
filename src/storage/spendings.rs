//! Spending repository for JSON storage
//!
//! Manages loading and saving spendings to spendings.json. Ids are handed
//! out here, one past the highest id seen so far.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{StorageError, StorageResult};
use crate::models::{Money, NewSpending, Spending, SpendingId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable spending data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SpendingData {
    spendings: Vec<Spending>,
}

/// Repository for spending persistence
pub struct SpendingRepository {
    path: PathBuf,
    /// Kept in insertion (id) order
    spendings: RwLock<Vec<Spending>>,
}

impl SpendingRepository {
    /// Create a new spending repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            spendings: RwLock::new(Vec::new()),
        }
    }

    /// Load spendings from disk
    pub fn load(&self) -> StorageResult<()> {
        let file_data: SpendingData = read_json(&self.path)?;

        let mut spendings = self
            .spendings
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        *spendings = file_data.spendings;
        spendings.sort_by_key(|s| s.id);
        Ok(())
    }

    /// Get all spendings in id order
    pub fn get_all(&self) -> StorageResult<Vec<Spending>> {
        let spendings = self
            .spendings
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(spendings.clone())
    }

    /// Exact sum of every stored amount, or `None` if it overflows
    pub fn checked_total(&self) -> StorageResult<Option<Money>> {
        let spendings = self
            .spendings
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(spendings
            .iter()
            .try_fold(Money::zero(), |total, s| total.checked_add(s.amount)))
    }

    /// Check whether any spending is filed under this category
    pub fn references_category(&self, name: &str) -> StorageResult<bool> {
        let spendings = self
            .spendings
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(spendings.iter().any(|s| s.category == name))
    }

    /// Append a spending, assigning its id
    pub fn insert(&self, new: NewSpending) -> StorageResult<Spending> {
        let mut spendings = self
            .spendings
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        let id = spendings
            .last()
            .map_or(SpendingId::new(1), |last| last.id.next());
        let spending = new.into_spending(id);

        let mut updated = spendings.clone();
        updated.push(spending.clone());

        write_json_atomic(
            &self.path,
            &SpendingData {
                spendings: updated.clone(),
            },
        )?;
        *spendings = updated;
        Ok(spending)
    }

    /// Count spendings
    pub fn count(&self) -> StorageResult<usize> {
        let spendings = self
            .spendings
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;
        Ok(spendings.len())
    }
}
