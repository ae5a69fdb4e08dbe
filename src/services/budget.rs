//! Budget service
//!
//! Onboarding, settings changes and the point-in-time figures shown on the
//! status screen.

use chrono::{DateTime, TimeZone, Utc};

use crate::audit::EntityType;
use crate::engine::{self, BudgetSummary, ChartPoint};
use crate::error::{SpendableError, SpendableResult};
use crate::models::{BudgetConfig, Money, WeekStart};
use crate::storage::Storage;

const CONFIG_ID: &str = "budget";

pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create the budget, anchored at `start`
    ///
    /// Fails if a budget already exists; use [`BudgetService::update_budget`]
    /// to change one.
    pub fn init_budget(
        &self,
        weekly_amount: Money,
        start_day: WeekStart,
        start: DateTime<Utc>,
    ) -> SpendableResult<BudgetConfig> {
        if self.storage.config.get()?.is_some() {
            return Err(SpendableError::Validation(
                "A budget is already configured; use `spendable budget set` to change it".into(),
            ));
        }

        self.create(weekly_amount, start_day, start)
    }

    /// Change the weekly amount and week-start day
    ///
    /// The accrual start date is kept. With no budget yet, one is created
    /// starting now.
    pub fn update_budget(
        &self,
        weekly_amount: Money,
        start_day: WeekStart,
    ) -> SpendableResult<BudgetConfig> {
        self.reconfigure(weekly_amount, start_day, None)
    }

    /// `update_budget`, optionally re-anchoring accrual at `new_start`
    ///
    /// Both changes are saved and audited as a single update.
    pub fn reconfigure(
        &self,
        weekly_amount: Money,
        start_day: WeekStart,
        new_start: Option<DateTime<Utc>>,
    ) -> SpendableResult<BudgetConfig> {
        let Some(before) = self.storage.config.get()? else {
            let start = new_start.unwrap_or_else(Utc::now);
            return self.create(weekly_amount, start_day, start);
        };

        let mut config = before.clone();
        config.update(weekly_amount, start_day);
        if let Some(start) = new_start {
            config.reset_start(start);
        }
        self.store_update(&before, config)
    }

    /// Move the accrual anchor, discarding the weeks accrued so far
    pub fn reset_start_date(&self, start: DateTime<Utc>) -> SpendableResult<BudgetConfig> {
        let before = self
            .storage
            .config
            .get()?
            .ok_or_else(SpendableError::budget_not_configured)?;

        let mut config = before.clone();
        config.reset_start(start);
        self.store_update(&before, config)
    }

    pub fn get_config(&self) -> SpendableResult<Option<BudgetConfig>> {
        self.storage.config.get()
    }

    /// Every headline figure at `now`
    pub fn summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> SpendableResult<BudgetSummary> {
        let config = self.storage.config.get()?;
        let expenses = self.storage.expenses.get_all()?;
        let infusions = self.storage.infusions.get_all()?;
        let goals = self.storage.goals.get_all()?;

        Ok(engine::summarize(
            config.as_ref(),
            &expenses,
            &infusions,
            &goals,
            now,
        ))
    }

    /// The running-balance series at `now`
    pub fn chart<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> SpendableResult<Vec<ChartPoint>> {
        let config = self.storage.config.get()?;
        let expenses = self.storage.expenses.get_all()?;
        Ok(engine::build_series(config.as_ref(), &expenses, now))
    }

    fn create(
        &self,
        weekly_amount: Money,
        start_day: WeekStart,
        start: DateTime<Utc>,
    ) -> SpendableResult<BudgetConfig> {
        let config = BudgetConfig::new(weekly_amount, start, start_day);
        config
            .validate()
            .map_err(|e| SpendableError::Validation(e.to_string()))?;

        self.storage.config.set(config.clone())?;
        self.storage.config.save()?;

        self.storage
            .log_create(EntityType::BudgetConfig, CONFIG_ID.into(), None, &config)?;

        tracing::info!(weekly = %config.weekly_amount, start_day = %config.start_day, "budget created");
        Ok(config)
    }

    fn store_update(
        &self,
        before: &BudgetConfig,
        config: BudgetConfig,
    ) -> SpendableResult<BudgetConfig> {
        config
            .validate()
            .map_err(|e| SpendableError::Validation(e.to_string()))?;

        self.storage.config.set(config.clone())?;
        self.storage.config.save()?;

        self.storage
            .log_update(EntityType::BudgetConfig, CONFIG_ID.into(), None, before, &config)?;

        Ok(config)
    }
}
