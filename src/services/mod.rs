//! Service layer for SpendLimit
//!
//! The validator gates every mutation; the query facade composes the
//! engine over live store snapshots and is what the CLI talks to.

pub mod query;
pub mod validator;

pub use query::{compute_views, Selection, Snapshot, SpendingQuery, Views};
pub use validator::Validator;
