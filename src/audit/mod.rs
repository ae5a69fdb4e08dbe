//! Audit trail for Spendable
//!
//! Every create, update and delete of the budget configuration, expenses,
//! infusions and goals is appended to `audit.log` as one JSON line holding
//! the record before and after the change.
//!
//! ```rust,ignore
//! use spendable::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.name.clone()),
//!     &expense,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
