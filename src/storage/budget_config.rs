//! Budget configuration repository
//!
//! There is at most one configuration. It lives in `config.json` and is
//! published as `Option<BudgetConfig>`, `None` until onboarding.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendableResult;
use crate::models::BudgetConfig;
use crate::observe::{Feed, Subscription};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigData {
    #[serde(default)]
    config: Option<BudgetConfig>,
}

pub struct ConfigRepository {
    path: PathBuf,
    data: RwLock<Option<BudgetConfig>>,
    feed: Feed<Option<BudgetConfig>>,
}

impl ConfigRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
            feed: Feed::new("configuration", None),
        }
    }

    pub fn load(&self) -> SpendableResult<()> {
        let file_data: ConfigData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        *data = file_data.config;
        self.feed.publish(data.clone());
        Ok(())
    }

    pub fn save(&self) -> SpendableResult<()> {
        let data = self.data.read().map_err(lock_error)?;
        write_json_atomic(
            &self.path,
            &ConfigData {
                config: data.clone(),
            },
        )
    }

    pub fn get(&self) -> SpendableResult<Option<BudgetConfig>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.clone())
    }

    /// Store the configuration, replacing any previous one
    pub fn set(&self, config: BudgetConfig) -> SpendableResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        *data = Some(config);
        self.feed.publish(data.clone());
        Ok(())
    }

    pub fn subscribe(&self) -> Subscription<Option<BudgetConfig>> {
        self.feed.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, WeekStart};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_absent_until_set() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigRepository::new(temp_dir.path().join("config.json"));
        repo.load().unwrap();
        assert!(repo.get().unwrap().is_none());

        let mut sub = repo.subscribe();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        repo.set(BudgetConfig::new(Money::from_units(100), start, WeekStart::MONDAY))
            .unwrap();

        assert!(sub.has_changed());
        assert_eq!(sub.latest().unwrap().weekly_amount, Money::from_units(100));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let start = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();
        let config = BudgetConfig::new(Money::from_units(75), start, WeekStart::SUNDAY);

        let repo = ConfigRepository::new(path.clone());
        repo.set(config.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = ConfigRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get().unwrap(), Some(config));
    }

    #[test]
    fn test_file_without_start_day_loads_monday() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"config": {"weekly_amount": 5000, "start_date": "2024-01-03T10:00:00Z"}}"#,
        )
        .unwrap();

        let repo = ConfigRepository::new(path);
        repo.load().unwrap();
        let config = repo.get().unwrap().unwrap();
        assert_eq!(config.start_day, WeekStart::MONDAY);
        assert_eq!(config.weekly_amount, Money::from_cents(5000));
    }
}
