//! Audit log CLI command

use crate::error::SpendableResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit(storage: &Storage, limit: usize) -> SpendableResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
