//! Spending model
//!
//! Spendings are append-only: once the store has assigned an id they are
//! never edited or removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SpendingId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spending {
    /// Assigned by the store at insertion
    pub id: SpendingId,

    /// Free-text label, may be empty
    pub name: String,

    /// Name of the category this spending is filed under
    pub category: String,

    /// Non-negative amount
    pub amount: Money,

    /// Day the spending happened
    pub date: NaiveDate,
}

impl Spending {
    #[cfg(test)]
    pub(crate) fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: SpendingId::new(id),
            name: name.into(),
            category: category.into(),
            amount,
            date,
        }
    }
}

impl fmt::Display for Spending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.category,
            self.amount
        )
    }
}

/// A validated spending that has not been stored yet
///
/// Only the validator builds these; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpending {
    name: String,
    category: String,
    amount: Money,
    date: NaiveDate,
}

impl NewSpending {
    pub(crate) fn new(name: String, category: String, amount: Money, date: NaiveDate) -> Self {
        Self {
            name,
            category,
            amount,
            date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Attach the id handed out by the store
    pub fn into_spending(self, id: SpendingId) -> Spending {
        Spending {
            id,
            name: self.name,
            category: self.category,
            amount: self.amount,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_spending_keeps_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let draft = NewSpending::new("Coffee".into(), "Food".into(), Money::from_cents(350), date);
        let spending = draft.into_spending(SpendingId::new(9));

        assert_eq!(spending.id, SpendingId::new(9));
        assert_eq!(spending.name, "Coffee");
        assert_eq!(spending.category, "Food");
        assert_eq!(spending.amount, Money::from_cents(350));
        assert_eq!(spending.date, date);
    }

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let spending = Spending::new(1, "Coffee", "Food", Money::from_cents(350), date);
        assert_eq!(spending.to_string(), "2024-06-03 Coffee [Food] 3.50");
    }

    #[test]
    fn test_serialization() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let spending = Spending::new(1, "", "Food", Money::from_cents(0), date);
        let json = serde_json::to_string(&spending).unwrap();
        let deserialized: Spending = serde_json::from_str(&json).unwrap();
        assert_eq!(spending, deserialized);
    }
}
