//! Per-category totals
//!
//! Sums use [`Money`] so totals compared against limits are exact. The store
//! refuses writes that would take the sum of all spendings past the `Money`
//! range; data that is already past it saturates instead of wrapping.

use std::collections::BTreeMap;

use crate::models::{Limit, Money, Spending};

/// Count and sum of the spendings in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    pub count: usize,
    pub total: Money,
}

/// One row of the category overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub spending_count: usize,
    pub total: Money,
}

/// A limit next to what was actually spent in its category and period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitStatus {
    pub limit: Limit,
    pub spent: Money,
}

impl LimitStatus {
    /// Limit minus spent; negative once the limit is exceeded
    pub fn remaining(&self) -> Money {
        self.limit.amount - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.limit.amount
    }
}

/// Totals keyed by category name; categories without spendings are absent
pub fn aggregate(spendings: &[Spending]) -> BTreeMap<String, CategoryTotals> {
    let mut totals: BTreeMap<String, CategoryTotals> = BTreeMap::new();
    for spending in spendings {
        let entry = totals.entry(spending.category.clone()).or_default();
        entry.count += 1;
        entry.total += spending.amount;
    }
    totals
}

/// Overview rows ordered by category name
pub fn category_summaries(spendings: &[Spending]) -> Vec<CategorySummary> {
    aggregate(spendings)
        .into_iter()
        .map(|(category, totals)| CategorySummary {
            category,
            spending_count: totals.count,
            total: totals.total,
        })
        .collect()
}

/// Pair each limit with the spending of its category in its own period
///
/// Ordered by category name, then period.
pub fn limit_statuses(limits: &[Limit], spendings: &[Spending]) -> Vec<LimitStatus> {
    let mut statuses: Vec<LimitStatus> = limits
        .iter()
        .map(|limit| {
            let spent = spendings
                .iter()
                .filter(|s| s.category == limit.category && limit.period.contains(s.date))
                .map(|s| s.amount)
                .sum::<Money>();
            LimitStatus {
                limit: limit.clone(),
                spent,
            }
        })
        .collect();

    statuses.sort_by(|a, b| {
        a.limit
            .category
            .cmp(&b.limit.category)
            .then(a.limit.period.cmp(&b.limit.period))
    });
    statuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn sample() -> Vec<Spending> {
        vec![
            Spending::new(1, "Lunch", "Food", Money::from_cents(1250), date(6, 3)),
            Spending::new(2, "Bus", "Transport", Money::from_cents(300), date(6, 4)),
            Spending::new(3, "Dinner", "Food", Money::from_cents(2500), date(7, 1)),
            Spending::new(4, "Coffee", "Food", Money::from_cents(350), date(6, 9)),
        ]
    }

    #[test]
    fn test_aggregate_counts_and_sums() {
        let spendings = sample();
        let totals = aggregate(&spendings);

        assert_eq!(totals.len(), 2);
        assert_eq!(
            totals["Food"],
            CategoryTotals {
                count: 3,
                total: Money::from_cents(4100)
            }
        );
        assert_eq!(totals["Transport"].count, 1);

        for (category, t) in &totals {
            let members: Vec<_> = spendings.iter().filter(|s| &s.category == category).collect();
            assert_eq!(t.count, members.len());
            assert_eq!(t.total, members.iter().map(|s| s.amount).sum::<Money>());
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
        assert!(category_summaries(&[]).is_empty());
    }

    #[test]
    fn test_zero_amounts_still_count() {
        let spendings = vec![Spending::new(1, "Free", "Other", Money::zero(), date(6, 1))];
        let totals = aggregate(&spendings);
        assert_eq!(totals["Other"].count, 1);
        assert!(totals["Other"].total.is_zero());
    }

    #[test]
    fn test_summaries_are_ordered_by_name() {
        let rows = category_summaries(&sample());
        let names: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport"]);
        assert_eq!(rows[0].spending_count, 3);
        assert_eq!(rows[0].total, Money::from_cents(4100));
    }

    #[test]
    fn test_limit_statuses_use_limit_period() {
        let june = Period::new(2024, 6).unwrap();
        let limits = vec![
            Limit::new("Transport", Money::from_cents(200), june),
            Limit::new("Food", Money::from_cents(2000), june),
            Limit::new("Health", Money::from_cents(5000), june),
        ];

        let statuses = limit_statuses(&limits, &sample());
        let names: Vec<_> = statuses.iter().map(|s| s.limit.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Health", "Transport"]);

        // July dinner is outside the June limit
        assert_eq!(statuses[0].spent, Money::from_cents(1600));
        assert!(!statuses[0].is_over());
        assert_eq!(statuses[0].remaining(), Money::from_cents(400));

        assert!(statuses[1].spent.is_zero());

        assert!(statuses[2].is_over());
        assert_eq!(statuses[2].remaining(), Money::from_cents(-100));
    }

    #[test]
    fn test_totals_at_the_amount_cap_are_exact() {
        let spendings: Vec<_> = (1..=3)
            .map(|id| Spending::new(id, "House", "Home", Money::MAX, date(6, id as u32)))
            .collect();
        let limits = vec![Limit::new("Home", Money::MAX, Period::new(2024, 6).unwrap())];

        let totals = aggregate(&spendings);
        assert_eq!(totals["Home"].total, Money::from_cents(3 * 99_999_999_999_999));

        let status = &limit_statuses(&limits, &spendings)[0];
        assert_eq!(status.remaining(), Money::from_cents(-2 * 99_999_999_999_999));
        assert!(status.is_over());
    }

    #[test]
    fn test_totals_past_the_money_range_do_not_panic() {
        let top = Money::from_cents(i64::MAX);
        let spendings = vec![
            Spending::new(1, "a", "Food", top, date(6, 1)),
            Spending::new(2, "b", "Food", top, date(6, 2)),
        ];
        let limits = vec![Limit::new("Food", Money::zero(), Period::new(2024, 6).unwrap())];

        assert_eq!(aggregate(&spendings)["Food"].total, top);
        let status = &limit_statuses(&limits, &spendings)[0];
        assert_eq!(status.spent, top);
        assert_eq!(status.remaining(), Money::from_cents(-i64::MAX));
    }
}
