//! Savings goal model
//!
//! Money put toward a goal is earmarked: it leaves the spendable pool while
//! the goal exists and comes back when the goal is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyTitle,
    NonPositiveTarget,
}

impl std::fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Goal title cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target must be greater than zero"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub target_amount: Money,
    #[serde(default)]
    pub funded_amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(title: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            funded_amount: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Add money to the goal
    ///
    /// Plain addition: funding past the target is accepted and shows up as
    /// a negative `remaining()`.
    pub fn fund(&mut self, amount: Money) {
        self.funded_amount += amount;
    }

    /// Target minus funded; negative once over-funded
    pub fn remaining(&self) -> Money {
        self.target_amount - self.funded_amount
    }

    pub fn is_fully_funded(&self) -> bool {
        self.funded_amount >= self.target_amount
    }

    pub fn is_overfunded(&self) -> bool {
        self.funded_amount > self.target_amount
    }

    /// Funding progress in whole percent, not capped at 100
    pub fn progress_percent(&self) -> i64 {
        if !self.target_amount.is_positive() {
            return 0;
        }
        self.funded_amount.cents() * 100 / self.target_amount.cents()
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        Ok(())
    }
}
