//! Query pipeline over spending snapshots
//!
//! Pure functions only: filter, then sort, then aggregate. Nothing here
//! touches storage or shared state, so any thread may run it on its own
//! snapshot.

pub mod aggregate;
pub mod filter;
pub mod sort;

pub use aggregate::{
    aggregate, category_summaries, limit_statuses, CategorySummary, CategoryTotals, LimitStatus,
};
pub use filter::{filter_spendings, limits_in_period, CategoryFilter, PeriodFilter};
pub use sort::{sort, SortMode};
