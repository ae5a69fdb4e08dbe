//! Storage layer for Spendable
//!
//! JSON file storage with atomic writes. Each repository keeps its records
//! in memory behind an `RwLock` and republishes them on its feed whenever
//! they change, so the observe layer sees every mutation.

pub mod budget_config;
pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod infusions;

pub use budget_config::ConfigRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use infusions::InfusionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SpendablePaths;
use crate::error::{SpendableError, SpendableResult};

/// Owns every repository plus the audit log
///
/// Built explicitly from paths and handed to services by reference.
pub struct Storage {
    paths: SpendablePaths,
    audit: AuditLogger,
    pub config: ConfigRepository,
    pub expenses: ExpenseRepository,
    pub infusions: InfusionRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create the directories and empty repositories; call `load_all` next
    pub fn new(paths: SpendablePaths) -> SpendableResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            config: ConfigRepository::new(paths.config_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            infusions: InfusionRepository::new(paths.infusions_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Convenience for `new` followed by `load_all`
    pub fn open(paths: SpendablePaths) -> SpendableResult<Self> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &SpendablePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&self) -> SpendableResult<()> {
        self.config.load()?;
        self.expenses.load()?;
        self.infusions.load()?;
        self.goals.load()?;
        tracing::debug!(dir = %self.paths.data_dir().display(), "storage loaded");
        Ok(())
    }

    pub fn save_all(&self) -> SpendableResult<()> {
        self.config.save()?;
        self.expenses.save()?;
        self.infusions.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Whether a budget configuration exists on disk
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> SpendableResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> SpendableResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> SpendableResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

pub(crate) fn lock_error<E: std::fmt::Display>(e: E) -> SpendableError {
    SpendableError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Narrow short-ID matches down to exactly one record
pub(crate) fn resolve_one<T: Clone>(
    entity_type: &'static str,
    identifier: &str,
    matches: Vec<&T>,
) -> SpendableResult<T> {
    match matches.as_slice() {
        [] => Err(SpendableError::NotFound {
            entity_type,
            identifier: identifier.to_string(),
        }),
        [only] => Ok((*only).clone()),
        many => Err(SpendableError::Ambiguous {
            entity_type,
            identifier: identifier.to_string(),
            matches: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.config.get().unwrap().is_none());
    }

    #[test]
    fn test_save_all_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::open(paths.clone()).unwrap();
        storage
            .expenses
            .upsert(Expense::new("Tea", Money::from_units(3)))
            .unwrap();
        storage.save_all().unwrap();

        let reopened = Storage::open(paths).unwrap();
        assert_eq!(reopened.expenses.total().unwrap(), Money::from_units(3));
    }

    #[test]
    fn test_audit_helpers_append() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(SpendablePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let expense = Expense::new("Tea", Money::from_units(3));

        storage
            .log_create(EntityType::Expense, expense.id.to_string(), Some("Tea".into()), &expense)
            .unwrap();
        storage
            .log_delete(EntityType::Expense, expense.id.to_string(), None, &expense)
            .unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }

    #[test]
    fn test_resolve_one() {
        let a = 1;
        let b = 2;
        assert_eq!(resolve_one("Thing", "x", vec![&a]).unwrap(), 1);
        assert!(matches!(
            resolve_one::<i32>("Thing", "x", vec![]),
            Err(SpendableError::NotFound { .. })
        ));
        assert!(matches!(
            resolve_one("Thing", "x", vec![&a, &b]),
            Err(SpendableError::Ambiguous { matches: 2, .. })
        ));
    }
}
