//! CLI command handlers
//!
//! Bridges clap argument parsing with the query facade. Each handler opens
//! its own [`SpendingQuery`](crate::services::SpendingQuery) over the store,
//! applies the selection given on the command line and prints the view.

pub mod audit;
pub mod category;
pub mod limit;
pub mod spending;

pub use audit::handle_audit_command;
pub use category::{handle_category_command, CategoryCommands};
pub use limit::{handle_limit_command, LimitCommands};
pub use spending::{handle_spending_command, SpendingCommands};
