//! Sort modes for the spending list
//!
//! Every mode is a total order: equal primary keys fall back to ascending
//! spending id, so the same input always comes out in the same order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Spending;

/// How the spending list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Name A-Z (case-sensitive, as stored)
    #[default]
    NameAsc,
    /// Name Z-A
    NameDesc,
    /// Smallest amount first
    AmountAsc,
    /// Largest amount first
    AmountDesc,
    /// Oldest first
    DateAsc,
    /// Newest first
    DateDesc,
}

impl SortMode {
    /// All modes in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::NameAsc,
            Self::NameDesc,
            Self::AmountAsc,
            Self::AmountDesc,
            Self::DateAsc,
            Self::DateDesc,
        ]
    }

    /// Stable identifier used on the command line and in settings
    pub fn key(&self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::AmountAsc => "amount-asc",
            Self::AmountDesc => "amount-desc",
            Self::DateAsc => "date-asc",
            Self::DateDesc => "date-desc",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::AmountAsc => "Amount (lowest first)",
            Self::AmountDesc => "Amount (highest first)",
            Self::DateAsc => "Date (oldest first)",
            Self::DateDesc => "Date (newest first)",
        }
    }

    /// Compare two spendings under this mode
    pub fn compare(&self, a: &Spending, b: &Spending) -> Ordering {
        let primary = match self {
            Self::NameAsc => a.name.cmp(&b.name),
            Self::NameDesc => b.name.cmp(&a.name),
            Self::AmountAsc => a.amount.cmp(&b.amount),
            Self::AmountDesc => b.amount.cmp(&a.amount),
            Self::DateAsc => a.date.cmp(&b.date),
            Self::DateDesc => b.date.cmp(&a.date),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| {
                let keys: Vec<_> = Self::all().iter().map(|m| m.key()).collect();
                format!("unknown sort mode '{}' (expected one of: {})", s, keys.join(", "))
            })
    }
}

/// Return a new vector ordered by `mode`; the input is left untouched
pub fn sort(spendings: &[Spending], mode: SortMode) -> Vec<Spending> {
    let mut sorted = spendings.to_vec();
    sorted.sort_by(|a, b| mode.compare(a, b));
    sorted
}
