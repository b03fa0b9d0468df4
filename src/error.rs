//! Error types for SpendLimit
//!
//! Validation failures and storage failures are kept as two distinct kinds so
//! callers can tell an expected bad input apart from a failed write.
//! `LedgerError` wraps both for code that only needs to propagate.

use thiserror::Error;

use crate::models::Money;

/// A proposed mutation was rejected before reaching storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The amount text is not a decimal number in the `0.00` convention
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),

    /// The amount is well-formed but larger than a single entry may be
    #[error("'{0}' is larger than the maximum amount {}", Money::MAX)]
    AmountTooLarge(String),

    /// The amount parsed but is below zero
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// The referenced category does not exist
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Month outside 1..=12
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// The category is still referenced by spendings or limits
    #[error("Category '{0}' is still in use")]
    CategoryInUse(String),
}

/// The storage collaborator failed to read or write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// A repository lock was poisoned
    #[error("Lock error: {0}")]
    Lock(String),

    /// The store refused the write; nothing was changed
    #[error("Write rejected: {0}")]
    Rejected(String),

    /// A snapshot feed stopped before the consumer was done with it
    #[error("Snapshot feed closed: {0}")]
    FeedClosed(&'static str),
}

/// The main error type for SpendLimit operations
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl LedgerError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for SpendLimit operations
pub type LedgerResult<T> = Result<T, LedgerError>;
