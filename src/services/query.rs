//! Query facade
//!
//! [`SpendingQuery`] is the single entry point a view talks to. It listens to
//! the store's snapshot feeds, keeps the view's selection (sort mode,
//! category filter, periods) and republishes derived views whenever either
//! changes. Mutations are validated against the latest categories, written
//! through the store, and synced before returning, so a caller always sees
//! its own write.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::engine::{
    category_summaries, filter_spendings, limit_statuses, sort, CategoryFilter, CategorySummary,
    LimitStatus, PeriodFilter, SortMode,
};
use crate::error::{LedgerError, LedgerResult, StorageResult, ValidationError};
use crate::feed::{Feed, Sequenced, Subscription};
use crate::models::{Category, Limit, NewSpending, Period, Spending, SpendingId};
use crate::storage::LedgerStore;

use super::validator::Validator;

/// What the view currently asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub sort_mode: SortMode,
    pub category: CategoryFilter,
    /// Window applied to the spending list and category summaries
    pub spending_period: PeriodFilter,
    /// Month whose limits are shown
    pub limit_period: Period,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            sort_mode: SortMode::default(),
            category: CategoryFilter::All,
            spending_period: PeriodFilter::All,
            limit_period: Period::current(),
        }
    }
}

/// The raw records a recompute works from
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub spendings: Arc<Vec<Spending>>,
    pub categories: Arc<Vec<Category>>,
    /// Limits of the selected limit period only
    pub limits: Arc<Vec<Limit>>,
}

/// Everything a view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views {
    pub sorted_spendings: Vec<Spending>,
    pub category_summaries: Vec<CategorySummary>,
    pub limits: Vec<LimitStatus>,
    pub categories: Vec<Category>,
}

/// Filter, sort and aggregate one snapshot under one selection
///
/// Summaries ignore the category filter so the overview always covers
/// every category with spendings in the window.
pub fn compute_views(snapshot: &Snapshot, selection: &Selection) -> Views {
    let filtered = filter_spendings(
        &snapshot.spendings,
        &selection.category,
        &selection.spending_period,
    );
    let window = filter_spendings(
        &snapshot.spendings,
        &CategoryFilter::All,
        &selection.spending_period,
    );

    Views {
        sorted_spendings: sort(&filtered, selection.sort_mode),
        category_summaries: category_summaries(&window),
        limits: limit_statuses(&snapshot.limits, &snapshot.spendings),
        categories: snapshot.categories.as_ref().clone(),
    }
}

/// One upstream snapshot, tagged with the feed it came from
enum Upstream {
    Spendings(Arc<Vec<Spending>>),
    Categories(Arc<Vec<Category>>),
    Limits(Arc<Vec<Limit>>),
}

fn tagged<T>(
    items: Vec<Sequenced<T>>,
    tag: fn(Arc<T>) -> Upstream,
) -> impl Iterator<Item = (u64, Upstream)> {
    items.into_iter().map(move |item| (item.sequence, tag(item.value)))
}

/// Output feeds, one per published view
struct Publications {
    sorted_spendings: Feed<Vec<Spending>>,
    category_summaries: Feed<Vec<CategorySummary>>,
    limits: Feed<Vec<LimitStatus>>,
    categories: Feed<Vec<Category>>,
}

impl Publications {
    fn new(views: &Views) -> Self {
        Self {
            sorted_spendings: Feed::new("sorted_spendings", views.sorted_spendings.clone()),
            category_summaries: Feed::new("category_summaries", views.category_summaries.clone()),
            limits: Feed::new("limits_for_period", views.limits.clone()),
            categories: Feed::new("categories", views.categories.clone()),
        }
    }

    fn publish(&self, views: &Views) -> StorageResult<()> {
        self.sorted_spendings.publish(views.sorted_spendings.clone())?;
        self.category_summaries.publish(views.category_summaries.clone())?;
        self.limits.publish(views.limits.clone())?;
        self.categories.publish(views.categories.clone())?;
        Ok(())
    }
}

/// Reactive query facade over a [`LedgerStore`]
///
/// One instance per view; selection changes take `&mut self`.
pub struct SpendingQuery<'a, S: LedgerStore + ?Sized> {
    store: &'a S,
    selection: Selection,
    spendings_feed: Subscription<Vec<Spending>>,
    categories_feed: Subscription<Vec<Category>>,
    limits_feed: Subscription<Vec<Limit>>,
    snapshot: Snapshot,
    views: Views,
    publications: Publications,
}

impl<'a, S: LedgerStore + ?Sized> SpendingQuery<'a, S> {
    /// Subscribe to the store with the default selection
    pub fn new(store: &'a S) -> StorageResult<Self> {
        Self::with_selection(store, Selection::default())
    }

    /// Subscribe to the store with an initial selection
    pub fn with_selection(store: &'a S, selection: Selection) -> StorageResult<Self> {
        let spendings_feed = store.all_spendings()?;
        let categories_feed = store.all_categories()?;
        let limits_feed = store.limits_for_period(selection.limit_period)?;

        // Every feed hands a new subscriber its current value first
        let snapshot = Snapshot {
            spendings: spendings_feed.recv()?,
            categories: categories_feed.recv()?,
            limits: limits_feed.recv()?,
        };
        let views = compute_views(&snapshot, &selection);
        let publications = Publications::new(&views);

        Ok(Self {
            store,
            selection,
            spendings_feed,
            categories_feed,
            limits_feed,
            snapshot,
            views,
            publications,
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The views as of the last recompute
    pub fn views(&self) -> &Views {
        &self.views
    }

    // === Publications ===

    pub fn sorted_spendings(&self) -> StorageResult<Subscription<Vec<Spending>>> {
        self.publications.sorted_spendings.subscribe()
    }

    pub fn category_summaries(&self) -> StorageResult<Subscription<Vec<CategorySummary>>> {
        self.publications.category_summaries.subscribe()
    }

    /// Limits of the selected month with what was spent against each
    pub fn limits_for_period(&self) -> StorageResult<Subscription<Vec<LimitStatus>>> {
        self.publications.limits.subscribe()
    }

    pub fn categories(&self) -> StorageResult<Subscription<Vec<Category>>> {
        self.publications.categories.subscribe()
    }

    // === Upstream ===

    /// Apply every pending upstream snapshot
    ///
    /// Pending snapshots from all three feeds are merged in publish order,
    /// and each one triggers one recompute and republish, so no published
    /// view pairs records from different points in time. Returns the number
    /// of recomputes.
    pub fn sync(&mut self) -> StorageResult<usize> {
        let mut pending: Vec<(u64, Upstream)> = Vec::new();
        pending.extend(tagged(self.spendings_feed.drain_sequenced()?, Upstream::Spendings));
        pending.extend(tagged(self.categories_feed.drain_sequenced()?, Upstream::Categories));
        pending.extend(tagged(self.limits_feed.drain_sequenced()?, Upstream::Limits));
        pending.sort_by_key(|(sequence, _)| *sequence);

        let recomputes = pending.len();
        for (_, update) in pending {
            match update {
                Upstream::Spendings(spendings) => self.snapshot.spendings = spendings,
                Upstream::Categories(categories) => self.snapshot.categories = categories,
                Upstream::Limits(limits) => self.snapshot.limits = limits,
            }
            self.recompute()?;
        }

        Ok(recomputes)
    }

    fn recompute(&mut self) -> StorageResult<()> {
        self.views = compute_views(&self.snapshot, &self.selection);
        self.publications.publish(&self.views)?;
        debug!(
            spendings = self.views.sorted_spendings.len(),
            summaries = self.views.category_summaries.len(),
            limits = self.views.limits.len(),
            "views recomputed"
        );
        Ok(())
    }

    // === Selection ===

    pub fn set_sort_mode(&mut self, mode: SortMode) -> StorageResult<()> {
        self.selection.sort_mode = mode;
        self.recompute()
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> StorageResult<()> {
        self.selection.category = filter;
        self.recompute()
    }

    /// Switch the month whose limits are shown
    pub fn set_period(&mut self, month: u32, year: i32) -> LedgerResult<()> {
        let period = Period::new(year, month).map_err(|_| ValidationError::InvalidMonth(month))?;
        if period == self.selection.limit_period {
            return Ok(());
        }

        // Replacing the subscription drops the old one upstream
        let limits_feed = self.store.limits_for_period(period)?;
        self.snapshot.limits = limits_feed.recv()?;
        self.limits_feed = limits_feed;
        self.selection.limit_period = period;
        self.recompute()?;
        Ok(())
    }

    /// Window the spending list and summaries to one month, or `None` for all
    pub fn set_spending_period(&mut self, period: Option<Period>) -> StorageResult<()> {
        self.selection.spending_period = period.into();
        self.recompute()
    }

    // === Mutations ===

    /// Record a spending dated today
    pub fn add_spending(
        &mut self,
        name: &str,
        amount_text: &str,
        category: &str,
    ) -> LedgerResult<SpendingId> {
        self.sync()?;
        let spending = Validator::new(&self.snapshot.categories)
            .validate_spending(name, amount_text, category)?;
        self.write_spending(spending)
    }

    /// Record a spending on a given date
    pub fn add_spending_on(
        &mut self,
        name: &str,
        amount_text: &str,
        category: &str,
        date: NaiveDate,
    ) -> LedgerResult<SpendingId> {
        self.sync()?;
        let spending = Validator::on(&self.snapshot.categories, date)
            .validate_spending(name, amount_text, category)?;
        self.write_spending(spending)
    }

    fn write_spending(&mut self, spending: NewSpending) -> LedgerResult<SpendingId> {
        let id = self.store.insert_spending(spending)?;
        self.sync()?;
        Ok(id)
    }

    /// Set the limit of a category for one month, replacing any existing one
    pub fn set_limit(
        &mut self,
        category: &str,
        amount_text: &str,
        month: u32,
        year: i32,
    ) -> LedgerResult<Limit> {
        self.sync()?;
        let limit = Validator::new(&self.snapshot.categories)
            .validate_limit(category, amount_text, month, year)?;

        self.store.insert_limit(limit.clone())?;
        self.sync()?;
        Ok(limit)
    }

    pub fn create_category(&mut self, name: &str) -> LedgerResult<Category> {
        self.sync()?;
        let category = Validator::new(&self.snapshot.categories).validate_category(name)?;

        self.store.insert_category(category.clone())?;
        self.sync()?;
        Ok(category)
    }

    /// Delete a category no spending or limit refers to
    pub fn delete_category(&mut self, name: &str) -> LedgerResult<()> {
        self.sync()?;
        if !self.snapshot.categories.iter().any(|c| c.name == name) {
            return Err(LedgerError::category_not_found(name));
        }

        // Limits of other months are not in the snapshot
        let all_limits = self.store.all_limits()?.recv()?;
        Validator::new(&self.snapshot.categories).validate_category_removal(
            name,
            &self.snapshot.spendings,
            &all_limits,
        )?;

        if !self.store.delete_category(name)? {
            return Err(LedgerError::category_not_found(name));
        }
        self.sync()?;
        Ok(())
    }
}
