//! Expense repository
//!
//! Keeps every expense in memory, persists them to `expenses.json`, and
//! republishes the full list (newest first) after every load or change.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SpendableResult;
use crate::models::{Expense, ExpenseId, Money};
use crate::observe::{Feed, Subscription};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_error, resolve_one};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    feed: Feed<Arc<Vec<Expense>>>,
}

fn newest_first(data: &HashMap<ExpenseId, Expense>) -> Vec<Expense> {
    let mut list: Vec<Expense> = data.values().cloned().collect();
    list.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.as_uuid().cmp(b.id.as_uuid())));
    list
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            feed: Feed::new("expenses", Arc::new(Vec::new())),
        }
    }

    /// Replace the in-memory set with the file contents
    pub fn load(&self) -> SpendableResult<()> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        tracing::debug!(count = data.len(), "loaded expenses");
        self.feed.publish(Arc::new(newest_first(&data)));
        Ok(())
    }

    pub fn save(&self) -> SpendableResult<()> {
        let data = self.data.read().map_err(lock_error)?;
        let file_data = ExpenseData {
            expenses: newest_first(&data),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: ExpenseId) -> SpendableResult<Option<Expense>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Look an expense up by full or short ID
    pub fn find(&self, identifier: &str) -> SpendableResult<Expense> {
        let data = self.data.read().map_err(lock_error)?;
        let matches: Vec<&Expense> = data.values().filter(|e| e.id.matches(identifier)).collect();
        resolve_one("Expense", identifier, matches)
    }

    /// All expenses, newest first
    pub fn get_all(&self) -> SpendableResult<Vec<Expense>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(newest_first(&data))
    }

    /// Expenses dated at or after `since`, newest first
    pub fn get_since(&self, since: DateTime<Utc>) -> SpendableResult<Vec<Expense>> {
        let mut list = self.get_all()?;
        list.retain(|e| e.date >= since);
        Ok(list)
    }

    pub fn total(&self) -> SpendableResult<Money> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().map(|e| e.amount).sum())
    }

    pub fn total_since(&self, since: DateTime<Utc>) -> SpendableResult<Money> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data
            .values()
            .filter(|e| e.date >= since)
            .map(|e| e.amount)
            .sum())
    }

    /// Insert or replace an expense
    pub fn upsert(&self, expense: Expense) -> SpendableResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(expense.id, expense);
        self.feed.publish(Arc::new(newest_first(&data)));
        Ok(())
    }

    pub fn delete(&self, id: ExpenseId) -> SpendableResult<Option<Expense>> {
        let mut data = self.data.write().map_err(lock_error)?;
        let removed = data.remove(&id);
        if removed.is_some() {
            self.feed.publish(Arc::new(newest_first(&data)));
        }
        Ok(removed)
    }

    pub fn count(&self) -> SpendableResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }

    pub fn subscribe(&self) -> Subscription<Arc<Vec<Expense>>> {
        self.feed.subscribe()
    }
}
