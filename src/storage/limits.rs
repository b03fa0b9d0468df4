//! Limit repository for JSON storage
//!
//! One limit per (category, period); writing a second one for the same slot
//! replaces the first.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{StorageError, StorageResult};
use crate::models::Limit;

use super::file_io::{read_json, write_json_atomic};

/// Serializable limit data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LimitData {
    limits: Vec<Limit>,
}

/// Repository for limit persistence
pub struct LimitRepository {
    path: PathBuf,
    limits: RwLock<Vec<Limit>>,
}

impl LimitRepository {
    /// Create a new limit repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            limits: RwLock::new(Vec::new()),
        }
    }

    /// Load limits from disk
    pub fn load(&self) -> StorageResult<()> {
        let file_data: LimitData = read_json(&self.path)?;

        let mut limits = self
            .limits
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        *limits = file_data.limits;
        sort_limits(&mut limits);
        Ok(())
    }

    /// Get all limits ordered by period, then category
    pub fn get_all(&self) -> StorageResult<Vec<Limit>> {
        let limits = self
            .limits
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(limits.clone())
    }

    /// Check whether any limit is set on this category
    pub fn references_category(&self, name: &str) -> StorageResult<bool> {
        let limits = self
            .limits
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(limits.iter().any(|l| l.category == name))
    }

    /// Insert or replace the limit for its (category, period)
    ///
    /// Returns the limit that was replaced, if any.
    pub fn upsert(&self, limit: Limit) -> StorageResult<Option<Limit>> {
        let mut limits = self
            .limits
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        let mut updated = limits.clone();
        let replaced = match updated.iter().position(|l| l.same_slot(&limit)) {
            Some(index) => Some(std::mem::replace(&mut updated[index], limit)),
            None => {
                updated.push(limit);
                None
            }
        };
        sort_limits(&mut updated);

        write_json_atomic(
            &self.path,
            &LimitData {
                limits: updated.clone(),
            },
        )?;
        *limits = updated;
        Ok(replaced)
    }
}

fn sort_limits(limits: &mut [Limit]) {
    limits.sort_by(|a, b| a.period.cmp(&b.period).then(a.category.cmp(&b.category)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, LimitRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("limits.json");
        let repo = LimitRepository::new(path);
        (temp_dir, repo)
    }

    fn june() -> Period {
        Period::new(2024, 6).unwrap()
    }

    #[test]
    fn test_upsert_replaces_same_slot() {
        let (_temp_dir, repo) = create_test_repo();

        let first = Limit::new("Food", Money::from_cents(20000), june());
        assert_eq!(repo.upsert(first.clone()).unwrap(), None);

        let second = Limit::new("Food", Money::from_cents(25000), june());
        assert_eq!(repo.upsert(second.clone()).unwrap(), Some(first));

        assert_eq!(repo.get_all().unwrap(), vec![second]);
    }

    #[test]
    fn test_upsert_keeps_period_then_category_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Limit::new("Food", Money::from_cents(100), june().next()))
            .unwrap();
        repo.upsert(Limit::new("Food", Money::from_cents(100), june()))
            .unwrap();
        repo.upsert(Limit::new("Bills", Money::from_cents(100), june()))
            .unwrap();

        let slots: Vec<_> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|l| format!("{}@{}", l.category, l.period))
            .collect();
        assert_eq!(slots, vec!["Bills@2024-06", "Food@2024-06", "Food@2024-07"]);
        assert!(repo.references_category("Food").unwrap());
        assert!(!repo.references_category("Pets").unwrap());
    }

    #[test]
    fn test_load_sorts_hand_edited_file() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("limits.json"),
            r#"{"limits": [
                {"category": "Food", "amount": 100, "period": {"year": 2024, "month": 7}},
                {"category": "Food", "amount": 100, "period": {"year": 2024, "month": 6}},
                {"category": "Bills", "amount": 100, "period": {"year": 2024, "month": 6}}
            ]}"#,
        )
        .unwrap();

        repo.load().unwrap();
        let slots: Vec<_> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|l| format!("{}@{}", l.category, l.period))
            .collect();
        assert_eq!(slots, vec!["Bills@2024-06", "Food@2024-06", "Food@2024-07"]);
    }

    #[test]
    fn test_load_rejects_month_out_of_range() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("limits.json"),
            r#"{"limits": [{"category": "Food", "amount": 100, "period": {"year": 2024, "month": 13}}]}"#,
        )
        .unwrap();

        assert!(matches!(repo.load(), Err(StorageError::Json(_))));
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(Limit::new("Food", Money::from_cents(100), june()))
            .unwrap();

        let repo2 = LimitRepository::new(temp_dir.path().join("limits.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap().len(), 1);
    }
}
