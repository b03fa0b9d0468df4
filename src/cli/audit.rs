//! Audit log CLI command

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the most recent audit records, oldest first
pub fn handle_audit_command(
    storage: &Storage,
    count: usize,
    category: Option<&str>,
) -> LedgerResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled (set \"audit_enabled\": true in config.json).");
        return Ok(());
    };

    let records = logger.read_recent(count, category)?;
    if records.is_empty() {
        match category {
            Some(name) => println!("No audit records for {}.", name),
            None => println!("No audit records."),
        }
        return Ok(());
    }

    for record in records {
        println!("{}", record);
    }
    Ok(())
}
