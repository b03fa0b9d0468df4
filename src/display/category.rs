//! Category display formatting

use crate::engine::CategorySummary;
use crate::models::{Category, Money};

/// Format the category names, one per line
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'spendlimit init' to create default categories.\n"
            .to_string();
    }

    let mut output = String::from("Categories:\n");
    for category in categories {
        output.push_str(&format!("  {}\n", category.name));
    }
    output
}

/// Format the per-category overview with a grand total
pub fn format_category_summaries(summaries: &[CategorySummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No spendings in this period.\n".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = format!(
        "{:name_width$}  {:>5}  {:>14}\n",
        "Category",
        "Count",
        "Total",
        name_width = name_width
    );
    output.push_str(&"-".repeat(name_width + 23));
    output.push('\n');

    for summary in summaries {
        output.push_str(&format!(
            "{:name_width$}  {:>5}  {:>14}\n",
            summary.category,
            summary.spending_count,
            summary.total.format_with_symbol(symbol),
            name_width = name_width
        ));
    }

    let total: Money = summaries.iter().map(|s| s.total).sum();
    let count: usize = summaries.iter().map(|s| s.spending_count).sum();
    output.push_str(&format!(
        "{:name_width$}  {:>5}  {:>14}\n",
        "Total",
        count,
        total.format_with_symbol(symbol),
        name_width = name_width
    ));

    output
}
