//! Expense service

use chrono::{DateTime, Utc};

use crate::audit::EntityType;
use crate::error::{SpendableError, SpendableResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Fields to change on an existing expense; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<DateTime<Utc>>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.date.is_none()
    }
}

pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense; `date` defaults to now
    pub fn add(
        &self,
        name: &str,
        amount: Money,
        date: Option<DateTime<Utc>>,
    ) -> SpendableResult<Expense> {
        let expense = Expense::with_date(name.trim(), amount, date.unwrap_or_else(Utc::now));
        expense
            .validate()
            .map_err(|e| SpendableError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        tracing::debug!(id = %expense.id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    pub fn update(&self, identifier: &str, changes: ExpenseChanges) -> SpendableResult<Expense> {
        if changes.is_empty() {
            return Err(SpendableError::Validation("Nothing to update".into()));
        }

        let before = self.storage.expenses.find(identifier)?;
        let mut expense = before.clone();

        if let Some(name) = changes.name {
            expense.set_name(name.trim());
        }
        if let Some(amount) = changes.amount {
            expense.set_amount(amount);
        }
        if let Some(date) = changes.date {
            expense.set_date(date);
        }

        expense
            .validate()
            .map_err(|e| SpendableError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &before,
            &expense,
        )?;

        Ok(expense)
    }

    pub fn delete(&self, identifier: &str) -> SpendableResult<Expense> {
        let expense = self.storage.expenses.find(identifier)?;
        self.storage
            .expenses
            .delete(expense.id)?
            .ok_or_else(|| SpendableError::expense_not_found(identifier))?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// All expenses, newest first
    pub fn list(&self) -> SpendableResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    pub fn list_since(&self, since: DateTime<Utc>) -> SpendableResult<Vec<Expense>> {
        self.storage.expenses.get_since(since)
    }

    pub fn find(&self, identifier: &str) -> SpendableResult<Expense> {
        self.storage.expenses.find(identifier)
    }
}
