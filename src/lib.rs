//! SpendLimit - personal spending tracker with monthly category limits
//!
//! Spendings are filed under categories; each category can carry a limit
//! per calendar month. The library turns the stored records into the views
//! a front end shows: a filtered, sorted spending list, per-category totals,
//! and each limit next to what was actually spent.
//!
//! # Architecture
//!
//! - `models`: Spending, Category, Limit, Money, Period
//! - `engine`: pure filter, sort and aggregation functions
//! - `feed`: live snapshot feeds over `std::sync::mpsc`
//! - `storage`: the `LedgerStore` trait and its JSON file implementation
//! - `services`: the validator and the reactive query facade
//! - `audit`: JSONL audit log of every write
//! - `config`: data directory resolution and user settings
//! - `cli` / `display`: the command-line shell
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlimit::config::LedgerPaths;
//! use spendlimit::services::SpendingQuery;
//! use spendlimit::storage::Storage;
//!
//! let storage = Storage::open(LedgerPaths::new()?)?;
//! let mut query = SpendingQuery::new(&storage)?;
//! query.add_spending("Coffee", "3.50", "Food")?;
//! println!("{:?}", query.views().category_summaries);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod feed;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult, StorageError, ValidationError};
