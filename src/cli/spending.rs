//! Spending CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_spending_details, format_spending_list};
use crate::engine::{CategoryFilter, SortMode};
use crate::error::LedgerResult;
use crate::models::Period;
use crate::services::SpendingQuery;
use crate::storage::LedgerStore;

/// Spending subcommands
#[derive(Subcommand)]
pub enum SpendingCommands {
    /// Record a spending
    Add {
        /// Amount, e.g. "3.50"
        amount: String,
        /// Category name
        category: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        name: String,
        /// Date of the spending (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List spendings
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Sort order (name-asc, name-desc, amount-asc, amount-desc, date-asc, date-desc)
        #[arg(short, long)]
        sort: Option<SortMode>,
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        period: Option<Period>,
    },
}

/// Handle a spending command
pub fn handle_spending_command<S: LedgerStore + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: SpendingCommands,
) -> LedgerResult<()> {
    let mut query = SpendingQuery::new(store)?;

    match cmd {
        SpendingCommands::Add {
            amount,
            category,
            name,
            date,
        } => {
            let id = match date {
                Some(date) => query.add_spending_on(&name, &amount, &category, date)?,
                None => query.add_spending(&name, &amount, &category)?,
            };

            if let Some(spending) = query.snapshot().spendings.iter().find(|s| s.id == id) {
                println!("Recorded spending");
                print!("{}", format_spending_details(spending, &settings.currency_symbol));
            }
        }

        SpendingCommands::List {
            category,
            sort,
            period,
        } => {
            query.set_sort_mode(sort.unwrap_or(settings.default_sort_mode))?;
            query.set_category_filter(CategoryFilter::from(category))?;
            query.set_spending_period(period)?;

            print!(
                "{}",
                format_spending_list(
                    &query.views().sorted_spendings,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}
