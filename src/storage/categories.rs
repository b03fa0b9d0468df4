//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{StorageError, StorageResult};
use crate::models::Category;

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> StorageResult<()> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        *categories = file_data.categories;
        categories.sort();
        Ok(())
    }

    /// Get all categories ordered by name
    pub fn get_all(&self) -> StorageResult<Vec<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Check whether a category with exactly this name exists
    pub fn contains(&self, name: &str) -> StorageResult<bool> {
        let categories = self
            .categories
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.iter().any(|c| c.name == name))
    }

    /// Add a category, persisting before the in-memory list changes
    pub fn insert(&self, category: Category) -> StorageResult<()> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        if category.name.trim().is_empty() {
            return Err(StorageError::Rejected("category name is empty".into()));
        }
        if categories.iter().any(|c| c.name == category.name) {
            return Err(StorageError::Rejected(format!(
                "category '{}' already exists",
                category.name
            )));
        }

        let mut updated = categories.clone();
        updated.push(category);
        updated.sort();

        write_json_atomic(
            &self.path,
            &CategoryData {
                categories: updated.clone(),
            },
        )?;
        *categories = updated;
        Ok(())
    }

    /// Remove a category by name, returning it if it existed
    pub fn remove(&self, name: &str) -> StorageResult<Option<Category>> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        let Some(index) = categories.iter().position(|c| c.name == name) else {
            return Ok(None);
        };

        let mut updated = categories.clone();
        let removed = updated.remove(index);

        write_json_atomic(
            &self.path,
            &CategoryData {
                categories: updated.clone(),
            },
        )?;
        *categories = updated;
        Ok(Some(removed))
    }

    /// Count categories
    pub fn count(&self) -> StorageResult<usize> {
        let categories = self
            .categories
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_keeps_names_sorted_and_unique() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(Category::new("Transport")).unwrap();
        repo.insert(Category::new("Food")).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Food", "Transport"]);

        let err = repo.insert(Category::new("Food")).unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
        assert_eq!(repo.count().unwrap(), 2);
        assert!(repo.contains("Food").unwrap());
        assert!(!repo.contains("food").unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert(Category::new("Food")).unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();
        assert!(repo2.contains("Food").unwrap());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(Category::new("Food")).unwrap();

        assert_eq!(repo.remove("Food").unwrap(), Some(Category::new("Food")));
        assert_eq!(repo.remove("Food").unwrap(), None);
        assert_eq!(repo.count().unwrap(), 0);
    }
}
