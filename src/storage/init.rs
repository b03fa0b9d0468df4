//! Storage initialization
//!
//! First-run setup: directories plus the default category list.

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{Category, DEFAULT_CATEGORIES};

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing category files are left untouched.
pub fn initialize_storage(paths: &LedgerPaths) -> LedgerResult<()> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        let mut categories: Vec<Category> =
            DEFAULT_CATEGORIES.iter().map(|name| Category::new(*name)).collect();
        categories.sort();
        write_json_atomic(paths.categories_file(), &CategoryData { categories })?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LedgerPaths) -> bool {
    !paths.categories_file().exists()
}
