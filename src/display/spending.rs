//! Spending display formatting

use crate::models::Spending;

use super::{format_date, truncate};

/// Format one spending as a list row
pub fn format_spending_row(spending: &Spending, symbol: &str, date_format: &str) -> String {
    let name = if spending.name.is_empty() {
        "(no name)"
    } else {
        spending.name.as_str()
    };

    format!(
        "{:>6} {:10} {:24} {:16} {:>14}",
        spending.id.to_string(),
        format_date(spending.date, date_format),
        truncate(name, 24),
        truncate(&spending.category, 16),
        spending.amount.format_with_symbol(symbol)
    )
}

/// Format the sorted spending list as a table
pub fn format_spending_list(spendings: &[Spending], symbol: &str, date_format: &str) -> String {
    if spendings.is_empty() {
        return "No spendings found.\n".to_string();
    }

    let mut output = format!(
        "{:>6} {:10} {:24} {:16} {:>14}\n",
        "ID", "Date", "Name", "Category", "Amount"
    );
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for spending in spendings {
        output.push_str(&format_spending_row(spending, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format a freshly recorded spending
pub fn format_spending_details(spending: &Spending, symbol: &str) -> String {
    let mut output = format!("Spending: {}\n", spending.id);
    output.push_str(&format!("Date:     {}\n", spending.date.format("%Y-%m-%d")));
    output.push_str(&format!("Category: {}\n", spending.category));
    output.push_str(&format!("Amount:   {}\n", spending.amount.format_with_symbol(symbol)));
    if !spending.name.is_empty() {
        output.push_str(&format!("Name:     {}\n", spending.name));
    }
    output
}
