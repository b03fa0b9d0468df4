//! Limit display formatting

use crate::engine::LimitStatus;
use crate::models::Period;

/// Format the limits of one month next to what was spent
pub fn format_limit_statuses(period: Period, statuses: &[LimitStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return format!("No limits set for {}.\n", period);
    }

    let mut output = format!("Limits for {}:\n", period);
    output.push_str(&format!(
        "  {:16} {:>14} {:>14} {:>14}\n",
        "Category", "Limit", "Spent", "Remaining"
    ));

    for status in statuses {
        let marker = if status.is_over() { "  OVER" } else { "" };
        output.push_str(&format!(
            "  {:16} {:>14} {:>14} {:>14}{}\n",
            super::truncate(&status.limit.category, 16),
            status.limit.amount.format_with_symbol(symbol),
            status.spent.format_with_symbol(symbol),
            status.remaining().format_with_symbol(symbol),
            marker
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Limit, Money};

    #[test]
    fn test_statuses() {
        let june = Period::new(2024, 6).unwrap();
        let statuses = vec![
            LimitStatus {
                limit: Limit::new("Food", Money::from_cents(10000), june),
                spent: Money::from_cents(12040),
            },
            LimitStatus {
                limit: Limit::new("Transport", Money::from_cents(5000), june),
                spent: Money::zero(),
            },
        ];

        let output = format_limit_statuses(june, &statuses, "");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Limits for 2024-06:");
        assert!(lines[2].contains("-20.40"));
        assert!(lines[2].ends_with("OVER"));
        assert!(!lines[3].contains("OVER"));
    }

    #[test]
    fn test_empty() {
        let june = Period::new(2024, 6).unwrap();
        assert_eq!(format_limit_statuses(june, &[], ""), "No limits set for 2024-06.\n");
    }
}
