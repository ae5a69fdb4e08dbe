//! Infusion model
//!
//! A lump sum added to spendable funds outside the weekly allowance. Only
//! ever created or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::InfusionId;
use super::money::Money;

/// Validation errors for infusions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfusionValidationError {
    NonPositiveAmount,
}

impl std::fmt::Display for InfusionValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Infusion amount must be greater than zero"),
        }
    }
}

impl std::error::Error for InfusionValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infusion {
    pub id: InfusionId,
    pub amount: Money,
    #[serde(default)]
    pub note: String,
    pub date: DateTime<Utc>,
}

impl Infusion {
    pub fn new(amount: Money, note: impl Into<String>) -> Self {
        Self::with_date(amount, note, Utc::now())
    }

    pub fn with_date(amount: Money, note: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: InfusionId::new(),
            amount,
            note: note.into(),
            date,
        }
    }

    pub fn validate(&self) -> Result<(), InfusionValidationError> {
        if !self.amount.is_positive() {
            return Err(InfusionValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_may_be_empty() {
        let infusion = Infusion::new(Money::from_units(50), "");
        assert!(infusion.note.is_empty());
        assert!(infusion.validate().is_ok());
    }

    #[test]
    fn test_non_positive_rejected() {
        assert_eq!(
            Infusion::new(Money::zero(), "gift").validate(),
            Err(InfusionValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_note_defaults_when_missing() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 5000,
            "date": "2024-01-02T10:00:00Z"
        }"#;
        let infusion: Infusion = serde_json::from_str(json).unwrap();
        assert_eq!(infusion.note, "");
        assert_eq!(infusion.amount, Money::from_units(50));
    }
}
