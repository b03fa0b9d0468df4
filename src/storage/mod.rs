//! Storage layer for SpendLimit
//!
//! [`LedgerStore`] is the collaborator the query facade talks to: it accepts
//! validated writes and exposes live snapshot subscriptions. [`Storage`] is
//! the JSON-file implementation. Each write goes to disk first (temp file +
//! rename), then updates memory, then publishes a new snapshot, so a failed
//! write leaves both the files and the feeds untouched.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod limits;
pub mod spendings;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use limits::LimitRepository;
pub use spendings::SpendingRepository;

use std::sync::Mutex;

use tracing::{info, warn};

use crate::audit::{AuditLogger, LedgerEvent};
use crate::config::paths::LedgerPaths;
use crate::engine::limits_in_period;
use crate::error::{LedgerResult, StorageError, StorageResult};
use crate::feed::{Feed, Subscription};
use crate::models::{Category, Limit, Money, NewSpending, Period, Spending, SpendingId};

/// The persistence collaborator behind the query facade
///
/// Inserts are atomic: they either fully apply and publish a new snapshot,
/// or fail with a [`StorageError`] and change nothing.
pub trait LedgerStore: Send + Sync {
    /// Append a spending and return the id the store assigned to it
    fn insert_spending(&self, spending: NewSpending) -> StorageResult<SpendingId>;

    /// Store a limit, replacing any existing one for the same category and month
    fn insert_limit(&self, limit: Limit) -> StorageResult<()>;

    fn insert_category(&self, category: Category) -> StorageResult<()>;

    /// Remove a category; returns false if it did not exist
    fn delete_category(&self, name: &str) -> StorageResult<bool>;

    /// Every spending, re-emitted after each change
    fn all_spendings(&self) -> StorageResult<Subscription<Vec<Spending>>>;

    /// Every category, re-emitted after each change
    fn all_categories(&self) -> StorageResult<Subscription<Vec<Category>>>;

    /// Every limit across all periods
    fn all_limits(&self) -> StorageResult<Subscription<Vec<Limit>>>;

    /// The limits of one month, re-emitted whenever any limit changes
    fn limits_for_period(&self, period: Period) -> StorageResult<Subscription<Vec<Limit>>>;
}

/// Main storage coordinator backed by JSON files
pub struct Storage {
    paths: LedgerPaths,
    pub spendings: SpendingRepository,
    pub categories: CategoryRepository,
    pub limits: LimitRepository,
    spendings_feed: Feed<Vec<Spending>>,
    categories_feed: Feed<Vec<Category>>,
    limits_feed: Feed<Vec<Limit>>,
    audit: Option<AuditLogger>,
    /// Serializes write-then-publish so snapshots go out in write order
    write_lock: Mutex<()>,
}

impl Storage {
    /// Open the data directory, loading every file that exists
    pub fn open(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let spendings = SpendingRepository::new(paths.spendings_file());
        let categories = CategoryRepository::new(paths.categories_file());
        let limits = LimitRepository::new(paths.limits_file());

        spendings.load()?;
        categories.load()?;
        limits.load()?;

        Ok(Self {
            spendings_feed: Feed::new("spendings", spendings.get_all()?),
            categories_feed: Feed::new("categories", categories.get_all()?),
            limits_feed: Feed::new("limits", limits.get_all()?),
            audit: Some(AuditLogger::new(paths.audit_log())),
            spendings,
            categories,
            limits,
            paths,
            write_lock: Mutex::new(()),
        })
    }

    /// Turn the audit log on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
        self
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn lock_writes(&self) -> StorageResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))
    }

    fn require_category(&self, name: &str) -> StorageResult<()> {
        if self.categories.contains(name)? {
            Ok(())
        } else {
            Err(StorageError::Rejected(format!("unknown category '{}'", name)))
        }
    }

    /// Record an already-persisted write; audit failures do not undo it
    fn audit(&self, event: LedgerEvent) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.record(event) {
                warn!(error = %e, "failed to write audit record");
            }
        }
    }

    /// The sum of all stored spendings must stay within the [`Money`] range
    fn require_spending_amount(&self, amount: Money) -> StorageResult<()> {
        if amount.is_negative() {
            return Err(StorageError::Rejected("spending amount is negative".into()));
        }
        if amount > Money::MAX {
            return Err(StorageError::Rejected(format!(
                "spending amount {} is above the maximum {}",
                amount,
                Money::MAX
            )));
        }
        let fits = self
            .spendings
            .checked_total()?
            .and_then(|total| total.checked_add(amount))
            .is_some();
        if !fits {
            return Err(StorageError::Rejected(
                "total of all spendings would overflow".into(),
            ));
        }
        Ok(())
    }
}

impl LedgerStore for Storage {
    fn insert_spending(&self, spending: NewSpending) -> StorageResult<SpendingId> {
        let _guard = self.lock_writes()?;
        self.require_category(spending.category())?;
        self.require_spending_amount(spending.amount())?;

        let stored = self.spendings.insert(spending)?;
        let delivered = self.spendings_feed.publish(self.spendings.get_all()?)?;
        info!(id = %stored.id, category = %stored.category, amount = %stored.amount, delivered, "spending stored");

        self.audit(LedgerEvent::spending_recorded(&stored));
        Ok(stored.id)
    }

    fn insert_limit(&self, limit: Limit) -> StorageResult<()> {
        let _guard = self.lock_writes()?;
        self.require_category(&limit.category)?;
        if limit.amount.is_negative() || limit.amount > Money::MAX {
            return Err(StorageError::Rejected(format!(
                "limit amount {} is outside 0.00..={}",
                limit.amount,
                Money::MAX
            )));
        }

        let replaced = self.limits.upsert(limit.clone())?;
        let delivered = self.limits_feed.publish(self.limits.get_all()?)?;
        info!(category = %limit.category, period = %limit.period, amount = %limit.amount, replaced = replaced.is_some(), delivered, "limit stored");

        self.audit(LedgerEvent::limit_set(&limit, replaced.as_ref()));
        Ok(())
    }

    fn insert_category(&self, category: Category) -> StorageResult<()> {
        let _guard = self.lock_writes()?;

        self.categories.insert(category.clone())?;
        self.categories_feed.publish(self.categories.get_all()?)?;
        info!(name = %category.name, "category created");

        self.audit(LedgerEvent::category_created(&category));
        Ok(())
    }

    fn delete_category(&self, name: &str) -> StorageResult<bool> {
        let _guard = self.lock_writes()?;

        if self.spendings.references_category(name)? || self.limits.references_category(name)? {
            return Err(StorageError::Rejected(format!(
                "category '{}' is still referenced",
                name
            )));
        }

        let Some(removed) = self.categories.remove(name)? else {
            return Ok(false);
        };
        self.categories_feed.publish(self.categories.get_all()?)?;
        info!(name = %removed.name, "category deleted");

        self.audit(LedgerEvent::category_deleted(&removed));
        Ok(true)
    }

    fn all_spendings(&self) -> StorageResult<Subscription<Vec<Spending>>> {
        self.spendings_feed.subscribe()
    }

    fn all_categories(&self) -> StorageResult<Subscription<Vec<Category>>> {
        self.categories_feed.subscribe()
    }

    fn all_limits(&self) -> StorageResult<Subscription<Vec<Limit>>> {
        self.limits_feed.subscribe()
    }

    fn limits_for_period(&self, period: Period) -> StorageResult<Subscription<Vec<Limit>>> {
        self.limits_feed
            .subscribe_with(move |all: &Vec<Limit>| limits_in_period(all, period))
    }
}
