//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_list, format_category_summaries};
use crate::error::LedgerResult;
use crate::models::Period;
use crate::services::SpendingQuery;
use crate::storage::LedgerStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category no spending or limit refers to
    Delete {
        /// Category name
        name: String,
    },

    /// Show spending count and total per category
    Summary {
        /// Only count spendings of this month (YYYY-MM)
        #[arg(short, long)]
        period: Option<Period>,
    },
}

/// Handle a category command
pub fn handle_category_command<S: LedgerStore + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: CategoryCommands,
) -> LedgerResult<()> {
    let mut query = SpendingQuery::new(store)?;

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&query.views().categories));
        }

        CategoryCommands::Add { name } => {
            let category = query.create_category(&name)?;
            println!("Created category: {}", category.name);
        }

        CategoryCommands::Delete { name } => {
            query.delete_category(&name)?;
            println!("Deleted category: {}", name);
        }

        CategoryCommands::Summary { period } => {
            query.set_spending_period(period)?;
            if let Some(period) = period {
                println!("Spending for {}:", period);
            }
            print!(
                "{}",
                format_category_summaries(
                    &query.views().category_summaries,
                    &settings.currency_symbol
                )
            );
        }
    }

    Ok(())
}
