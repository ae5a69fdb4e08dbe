//! Infusion service
//!
//! Infusions are add-or-delete only; there is no edit.

use chrono::{DateTime, Utc};

use crate::audit::EntityType;
use crate::error::{SpendableError, SpendableResult};
use crate::models::{Infusion, Money};
use crate::storage::Storage;

pub struct InfusionService<'a> {
    storage: &'a Storage,
}

impl<'a> InfusionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add(
        &self,
        amount: Money,
        note: &str,
        date: Option<DateTime<Utc>>,
    ) -> SpendableResult<Infusion> {
        let infusion = Infusion::with_date(amount, note.trim(), date.unwrap_or_else(Utc::now));
        infusion
            .validate()
            .map_err(|e| SpendableError::Validation(e.to_string()))?;

        self.storage.infusions.upsert(infusion.clone())?;
        self.storage.infusions.save()?;

        self.storage.log_create(
            EntityType::Infusion,
            infusion.id.to_string(),
            label(&infusion),
            &infusion,
        )?;

        Ok(infusion)
    }

    pub fn delete(&self, identifier: &str) -> SpendableResult<Infusion> {
        let infusion = self.storage.infusions.find(identifier)?;
        self.storage
            .infusions
            .delete(infusion.id)?
            .ok_or_else(|| SpendableError::infusion_not_found(identifier))?;
        self.storage.infusions.save()?;

        self.storage.log_delete(
            EntityType::Infusion,
            infusion.id.to_string(),
            label(&infusion),
            &infusion,
        )?;

        Ok(infusion)
    }

    pub fn list(&self) -> SpendableResult<Vec<Infusion>> {
        self.storage.infusions.get_all()
    }

    pub fn find(&self, identifier: &str) -> SpendableResult<Infusion> {
        self.storage.infusions.find(identifier)
    }
}

fn label(infusion: &Infusion) -> Option<String> {
    (!infusion.note.is_empty()).then(|| infusion.note.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendablePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Storage::open(paths).unwrap())
    }

    #[test]
    fn test_add_list_delete() {
        let (_temp, storage) = create_test_storage();
        let service = InfusionService::new(&storage);

        let gift = service.add(Money::from_units(50), " birthday ", None).unwrap();
        assert_eq!(gift.note, "birthday");
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(storage.infusions.total().unwrap(), Money::from_units(50));

        service.delete(&gift.id.to_string()).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }

    #[test]
    fn test_non_positive_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = InfusionService::new(&storage);
        assert!(service.add(Money::zero(), "", None).unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_id() {
        let (_temp, storage) = create_test_storage();
        let service = InfusionService::new(&storage);
        assert!(service.delete("inf-00000000").unwrap_err().is_not_found());
    }
}
