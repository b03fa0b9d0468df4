//! Monthly spending limit model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::Period;

/// A ceiling for one category in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    /// Name of the limited category
    pub category: String,

    /// Non-negative ceiling
    pub amount: Money,

    /// The month the limit applies to
    pub period: Period,
}

impl Limit {
    pub(crate) fn new(category: impl Into<String>, amount: Money, period: Period) -> Self {
        Self {
            category: category.into(),
            amount,
            period,
        }
    }

    pub fn month(&self) -> u32 {
        self.period.month()
    }

    pub fn year(&self) -> i32 {
        self.period.year()
    }

    /// Whether this limit occupies the same (category, period) slot
    pub fn same_slot(&self, other: &Limit) -> bool {
        self.category == other.category && self.period == other.period
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.period, self.category, self.amount)
    }
}
