//! Configuration for SpendLimit
//!
//! - data directory resolution (`SPENDLIMIT_DATA_DIR`, then XDG)
//! - user settings persisted to `config.json`

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
