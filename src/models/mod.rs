//! Core data models for SpendLimit
//!
//! Immutable value types for the spending domain: categories, spendings,
//! monthly limits, and the money and period types they are built from.

pub mod category;
pub mod ids;
pub mod limit;
pub mod money;
pub mod period;
pub mod spending;

pub use category::{Category, DEFAULT_CATEGORIES};
pub use ids::SpendingId;
pub use limit::Limit;
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use spending::{NewSpending, Spending};
