//! Ledger events
//!
//! Each successful write becomes one [`LedgerEvent`]. The log stores them as
//! [`AuditRecord`]s, one JSON object per line, tagged by `"event"`.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Limit, Money, Period, Spending, SpendingId};

/// One change to the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    SpendingRecorded {
        id: SpendingId,
        name: String,
        category: String,
        amount: Money,
        date: NaiveDate,
    },
    LimitSet {
        category: String,
        period: Period,
        amount: Money,
        /// Amount that was replaced for the same month
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous: Option<Money>,
    },
    CategoryCreated {
        name: String,
    },
    CategoryDeleted {
        name: String,
    },
}

impl LedgerEvent {
    pub fn spending_recorded(spending: &Spending) -> Self {
        Self::SpendingRecorded {
            id: spending.id,
            name: spending.name.clone(),
            category: spending.category.clone(),
            amount: spending.amount,
            date: spending.date,
        }
    }

    pub fn limit_set(limit: &Limit, replaced: Option<&Limit>) -> Self {
        Self::LimitSet {
            category: limit.category.clone(),
            period: limit.period,
            amount: limit.amount,
            previous: replaced.map(|l| l.amount),
        }
    }

    pub fn category_created(category: &Category) -> Self {
        Self::CategoryCreated {
            name: category.name.clone(),
        }
    }

    pub fn category_deleted(category: &Category) -> Self {
        Self::CategoryDeleted {
            name: category.name.clone(),
        }
    }

    /// The category this event touches
    pub fn category(&self) -> &str {
        match self {
            Self::SpendingRecorded { category, .. } | Self::LimitSet { category, .. } => category,
            Self::CategoryCreated { name } | Self::CategoryDeleted { name } => name,
        }
    }
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpendingRecorded {
                id,
                name,
                category,
                amount,
                date,
            } => write!(f, "spending {} {:?} {} in {} on {}", id, name, amount, category, date),
            Self::LimitSet {
                category,
                period,
                amount,
                previous: Some(previous),
            } => write!(f, "limit {} {} changed {} -> {}", category, period, previous, amount),
            Self::LimitSet {
                category,
                period,
                amount,
                previous: None,
            } => write!(f, "limit {} {} set to {}", category, period, amount),
            Self::CategoryCreated { name } => write!(f, "category {} created", name),
            Self::CategoryDeleted { name } => write!(f, "category {} deleted", name),
        }
    }
}

/// A ledger event with the time it was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: LedgerEvent,
}

impl AuditRecord {
    pub fn now(event: LedgerEvent) -> Self {
        Self {
            at: Utc::now(),
            event,
        }
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%Y-%m-%d %H:%M:%S UTC"), self.event)
    }
}
