//! Audit log for SpendLimit
//!
//! Every successful write to the ledger is appended to `audit.log` as one
//! JSON line: what happened, to which category, and when. A replaced limit
//! keeps the amount it replaced.

mod event;
mod logger;

pub use event::{AuditRecord, LedgerEvent};
pub use logger::AuditLogger;
