//! Append-only JSONL audit log

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

use super::event::{AuditRecord, LedgerEvent};

/// Appends ledger events to `audit.log` and reads them back
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stamp an event with the current time and append it
    pub fn record(&self, event: LedgerEvent) -> StorageResult<AuditRecord> {
        let record = AuditRecord::now(event);

        let mut line = serde_json::to_string(&record)
            .map_err(|e| StorageError::Json(format!("Failed to serialize audit record: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StorageError::Io(format!("Failed to open audit log: {}", e)))?;
        file.write_all(line.as_bytes())
            .map_err(|e| StorageError::Io(format!("Failed to write audit record: {}", e)))?;

        Ok(record)
    }

    /// Every record, oldest first; a missing log reads as empty
    pub fn read_all(&self) -> StorageResult<Vec<AuditRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Io(format!("Failed to open audit log: {}", e))),
        };

        BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(|(index, line)| match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(serde_json::from_str(&line).map_err(|e| {
                    StorageError::Json(format!("Bad audit record at line {}: {}", index + 1, e))
                })),
                Err(e) => Some(Err(StorageError::Io(format!(
                    "Failed to read audit log line {}: {}",
                    index + 1,
                    e
                )))),
            })
            .collect()
    }

    /// The last `count` records, optionally only those touching one category
    pub fn read_recent(
        &self,
        count: usize,
        category: Option<&str>,
    ) -> StorageResult<Vec<AuditRecord>> {
        let mut records = self.read_all()?;
        if let Some(name) = category {
            records.retain(|r| r.event.category() == name);
        }
        let start = records.len().saturating_sub(count);
        Ok(records.split_off(start))
    }
}
