//! Budget configuration model
//!
//! There is exactly one configuration per installation. It is created at
//! onboarding and afterwards only replaced; the accrual anchor
//! (`start_date`) survives settings changes unless explicitly reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::week::WeekStart;

/// Validation errors for the budget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetConfigValidationError {
    NegativeWeeklyAmount,
}

impl std::fmt::Display for BudgetConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeWeeklyAmount => write!(f, "Weekly amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetConfigValidationError {}

/// The singleton weekly budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredBudgetConfig")]
pub struct BudgetConfig {
    /// Allowance credited once per aligned week
    pub weekly_amount: Money,

    /// First accrual anchor
    pub start_date: DateTime<Utc>,

    /// Weekday that opens each week
    pub start_day: WeekStart,

    /// Last settings change; files without it report `start_date`
    pub updated_at: DateTime<Utc>,
}

/// On-disk shape. Older files lack `start_day` (Monday) and `updated_at`.
#[derive(Deserialize)]
struct StoredBudgetConfig {
    weekly_amount: Money,
    start_date: DateTime<Utc>,
    #[serde(default)]
    start_day: WeekStart,
    updated_at: Option<DateTime<Utc>>,
}

impl From<StoredBudgetConfig> for BudgetConfig {
    fn from(stored: StoredBudgetConfig) -> Self {
        Self {
            weekly_amount: stored.weekly_amount,
            start_date: stored.start_date,
            start_day: stored.start_day,
            updated_at: stored.updated_at.unwrap_or(stored.start_date),
        }
    }
}

impl BudgetConfig {
    pub fn new(weekly_amount: Money, start_date: DateTime<Utc>, start_day: WeekStart) -> Self {
        Self {
            weekly_amount,
            start_date,
            start_day,
            updated_at: Utc::now(),
        }
    }

    /// Replace the weekly amount and week-start day, keeping the anchor
    pub fn update(&mut self, weekly_amount: Money, start_day: WeekStart) {
        self.weekly_amount = weekly_amount;
        self.start_day = start_day;
        self.updated_at = Utc::now();
    }

    /// Move the accrual anchor
    pub fn reset_start(&mut self, start_date: DateTime<Utc>) {
        self.start_date = start_date;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), BudgetConfigValidationError> {
        if self.weekly_amount.is_negative() {
            return Err(BudgetConfigValidationError::NegativeWeeklyAmount);
        }
        Ok(())
    }
}
