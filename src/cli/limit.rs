//! Limit CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_limit_statuses;
use crate::error::LedgerResult;
use crate::models::Period;
use crate::services::SpendingQuery;
use crate::storage::LedgerStore;

/// Limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the monthly limit of a category, replacing any existing one
    Set {
        /// Category name
        category: String,
        /// Limit amount, e.g. "200" or "200.00"
        amount: String,
        /// Month the limit applies to (YYYY-MM), defaults to this month
        #[arg(short, long)]
        period: Option<Period>,
    },

    /// Show the limits of a month with what was spent against them
    List {
        /// Month to show (YYYY-MM), defaults to this month
        #[arg(short, long)]
        period: Option<Period>,
    },
}

/// Handle a limit command
pub fn handle_limit_command<S: LedgerStore + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: LimitCommands,
) -> LedgerResult<()> {
    let mut query = SpendingQuery::new(store)?;

    match cmd {
        LimitCommands::Set {
            category,
            amount,
            period,
        } => {
            let period = period.unwrap_or_else(Period::current);
            let limit = query.set_limit(&category, &amount, period.month(), period.year())?;
            println!(
                "Limit for {} in {} set to {}",
                limit.category,
                limit.period,
                limit.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        LimitCommands::List { period } => {
            let period = period.unwrap_or_else(Period::current);
            query.set_period(period.month(), period.year())?;
            print!(
                "{}",
                format_limit_statuses(period, &query.views().limits, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
