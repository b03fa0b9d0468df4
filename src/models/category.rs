//! Category model
//!
//! A category is identified by its name alone; there is no separate id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named bucket spendings and limits are filed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category {
    /// Unique, non-empty name
    pub name: String,
}

impl Category {
    /// Create a category without validation; producers go through
    /// [`Validator::validate_category`](crate::services::Validator::validate_category)
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Categories seeded into a fresh data directory
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Bills",
    "Health",
    "Entertainment",
    "Shopping",
    "Other",
];
