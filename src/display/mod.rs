//! Display formatting for terminal output
//!
//! Plain-text tables built from the query facade's views. Amounts are
//! printed as `0.00`, followed by the configured currency symbol if any.

pub mod category;
pub mod limit;
pub mod spending;

pub use category::{format_category_list, format_category_summaries};
pub use limit::format_limit_statuses;
pub use spending::{format_spending_details, format_spending_list};

use std::fmt::Write;

use chrono::NaiveDate;

/// Format a date with a user-supplied strftime pattern
///
/// Patterns chrono cannot render fall back to `%Y-%m-%d`.
pub(crate) fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Truncate a string to max length, adding "..." if truncated
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
