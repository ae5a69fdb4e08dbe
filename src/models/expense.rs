//! Expense model
//!
//! A one-off spend. Name, amount and date stay editable after creation;
//! listings show newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create an expense dated now
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self::with_date(name, amount, Utc::now())
    }

    pub fn with_date(name: impl Into<String>, amount: Money, date: DateTime<Utc>) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            date,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_expense_is_dated_now() {
        let before = Utc::now();
        let expense = Expense::new("Coffee", Money::from_cents(450));
        assert!(expense.date >= before);
        assert_eq!(expense.name, "Coffee");
    }

    #[test]
    fn test_edit_fields() {
        let date = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        let mut expense = Expense::with_date("Lunch", Money::from_units(12), date);
        let id = expense.id;

        expense.set_name("Dinner");
        expense.set_amount(Money::from_units(30));
        expense.set_date(date + chrono::Duration::days(1));

        assert_eq!(expense.id, id);
        assert_eq!(expense.name, "Dinner");
        assert_eq!(expense.amount, Money::from_units(30));
        assert_eq!(expense.date, date + chrono::Duration::days(1));
    }

    #[test]
    fn test_validation() {
        assert!(Expense::new("Book", Money::from_units(20)).validate().is_ok());
        assert_eq!(
            Expense::new("   ", Money::from_units(20)).validate(),
            Err(ExpenseValidationError::EmptyName)
        );
        assert_eq!(
            Expense::new("Book", Money::zero()).validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );
        assert_eq!(
            Expense::new("Refund", Money::from_cents(-100)).validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );
    }
}
