//! Validation gate for proposed mutations
//!
//! Pure checks against a category snapshot; nothing here touches storage.
//! Rules run in a fixed order: amount parse, amount sign, category, month.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Category, Limit, Money, MoneyParseError, NewSpending, Period, Spending};

/// Checks spendings, limits and categories before they are written
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    categories: &'a [Category],
    today: NaiveDate,
}

impl<'a> Validator<'a> {
    /// Validate against `categories`, dating new spendings with the local date
    pub fn new(categories: &'a [Category]) -> Self {
        Self::on(categories, chrono::Local::now().date_naive())
    }

    /// Validate against `categories`, dating new spendings with `today`
    pub fn on(categories: &'a [Category], today: NaiveDate) -> Self {
        Self { categories, today }
    }

    /// Check a new spending; the name may be empty
    pub fn validate_spending(
        &self,
        name: &str,
        amount_text: &str,
        category: &str,
    ) -> Result<NewSpending, ValidationError> {
        let amount = parse_amount(amount_text)?;
        self.require_category(category)?;

        Ok(NewSpending::new(
            name.to_string(),
            category.to_string(),
            amount,
            self.today,
        ))
    }

    /// Check a limit for `category` in `month`/`year`
    pub fn validate_limit(
        &self,
        category: &str,
        amount_text: &str,
        month: u32,
        year: i32,
    ) -> Result<Limit, ValidationError> {
        let amount = parse_amount(amount_text)?;
        self.require_category(category)?;
        let period = Period::new(year, month).map_err(|_| ValidationError::InvalidMonth(month))?;

        Ok(Limit::new(category, amount, period))
    }

    /// Check a new category name (trimmed)
    pub fn validate_category(&self, name: &str) -> Result<Category, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        if self.knows(name) {
            return Err(ValidationError::DuplicateCategory(name.to_string()));
        }
        Ok(Category::new(name))
    }

    /// Refuse to delete a category that spendings or limits still point at
    pub fn validate_category_removal(
        &self,
        name: &str,
        spendings: &[Spending],
        limits: &[Limit],
    ) -> Result<(), ValidationError> {
        self.require_category(name)?;
        let referenced = spendings.iter().any(|s| s.category == name)
            || limits.iter().any(|l| l.category == name);
        if referenced {
            return Err(ValidationError::CategoryInUse(name.to_string()));
        }
        Ok(())
    }

    fn knows(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    fn require_category(&self, name: &str) -> Result<(), ValidationError> {
        if self.knows(name) {
            Ok(())
        } else {
            debug!(category = name, "rejected unknown category");
            Err(ValidationError::UnknownCategory(name.to_string()))
        }
    }
}

fn parse_amount(text: &str) -> Result<Money, ValidationError> {
    let amount = Money::parse(text).map_err(|e| match e {
        MoneyParseError::OutOfRange(_) => ValidationError::AmountTooLarge(text.to_string()),
        MoneyParseError::InvalidFormat(_) => ValidationError::NotANumber(text.to_string()),
    })?;
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(amount)
}
