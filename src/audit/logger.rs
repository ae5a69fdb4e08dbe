//! Append-only JSONL audit log

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendableError, SpendableResult};

use super::entry::AuditEntry;

/// Writes one JSON object per line and flushes after every entry
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn log(&self, entry: &AuditEntry) -> SpendableResult<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| SpendableError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SpendableError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", json)
            .and_then(|_| file.flush())
            .map_err(|e| SpendableError::Io(format!("Failed to write audit entry: {}", e)))?;

        tracing::trace!(
            operation = %entry.operation,
            entity = %entry.entity_type,
            id = %entry.entity_id,
            "audit entry written"
        );
        Ok(())
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> SpendableResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| SpendableError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                SpendableError::Io(format!("Failed to read audit log line {}: {}", line_no, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                SpendableError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_no, e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> SpendableResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn entry_count(&self) -> SpendableResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn expense_entry(i: usize) -> AuditEntry {
        AuditEntry::create(
            EntityType::Expense,
            format!("exp-{}", i),
            Some(format!("Expense {}", i)),
            &json!({"amount": i * 100}),
        )
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = test_logger();
        assert!(!logger.path().exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_log_and_read_back() {
        let (logger, temp) = test_logger();
        logger.log(&expense_entry(1)).unwrap();
        logger
            .log(&AuditEntry::delete(EntityType::Goal, "goal-1", None, &json!({})))
            .unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        let entries = reopened.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Expense);
        assert_eq!(entries[1].operation, Operation::Delete);
    }

    #[test]
    fn test_read_recent_keeps_order() {
        let (logger, _temp) = test_logger();
        for i in 0..6 {
            logger.log(&expense_entry(i)).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        let ids: Vec<&str> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["exp-4", "exp-5"]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 6);
    }

    #[test]
    fn test_blank_lines_skipped_and_garbage_rejected() {
        let (logger, _temp) = test_logger();
        logger.log(&expense_entry(1)).unwrap();
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file).unwrap();
        assert_eq!(logger.entry_count().unwrap(), 1);

        writeln!(file, "not json").unwrap();
        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
