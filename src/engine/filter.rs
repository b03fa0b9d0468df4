//! Category and period filters
//!
//! Both filters are AND-composed and only ever drop records; the relative
//! order of what survives is the input order.

use std::fmt;

use crate::models::{Limit, Period, Spending};

/// Which category the spending list is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show every category
    #[default]
    All,
    /// Show only spendings whose category equals this name exactly
    Only(String),
}

impl CategoryFilter {
    pub fn only(name: impl Into<String>) -> Self {
        Self::Only(name.into())
    }

    /// Map the legacy "empty string means everything" convention
    pub fn from_sentinel(name: &str) -> Self {
        if name.is_empty() {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }

    pub fn matches(&self, spending: &Spending) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => spending.category == *name,
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all categories"),
            Self::Only(name) => write!(f, "{}", name),
        }
    }
}

/// Which months the spending list is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PeriodFilter {
    #[default]
    All,
    Only(Period),
}

impl PeriodFilter {
    pub fn matches(&self, spending: &Spending) -> bool {
        match self {
            Self::All => true,
            Self::Only(period) => period.contains(spending.date),
        }
    }
}

impl From<Option<Period>> for PeriodFilter {
    fn from(value: Option<Period>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all periods"),
            Self::Only(period) => write!(f, "{}", period),
        }
    }
}

/// Keep the spendings matching both filters, in input order
pub fn filter_spendings(
    spendings: &[Spending],
    category: &CategoryFilter,
    period: &PeriodFilter,
) -> Vec<Spending> {
    spendings
        .iter()
        .filter(|s| category.matches(s) && period.matches(s))
        .cloned()
        .collect()
}

/// Keep the limits set for exactly this period, in input order
pub fn limits_in_period(limits: &[Limit], period: Period) -> Vec<Limit> {
    limits
        .iter()
        .filter(|l| l.period == period)
        .cloned()
        .collect()
}
