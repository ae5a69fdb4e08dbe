//! Goal repository, persisted to `goals.json`
//!
//! Goals are published most recently created first.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::SpendableResult;
use crate::models::{Goal, GoalId, Money};
use crate::observe::{Feed, Subscription};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_error, resolve_one};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<Goal>,
}

pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, Goal>>,
    feed: Feed<Arc<Vec<Goal>>>,
}

fn newest_first(data: &HashMap<GoalId, Goal>) -> Vec<Goal> {
    let mut list: Vec<Goal> = data.values().cloned().collect();
    list.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });
    list
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            feed: Feed::new("goals", Arc::new(Vec::new())),
        }
    }

    pub fn load(&self) -> SpendableResult<()> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        data.extend(file_data.goals.into_iter().map(|g| (g.id, g)));

        tracing::debug!(count = data.len(), "loaded goals");
        self.feed.publish(Arc::new(newest_first(&data)));
        Ok(())
    }

    pub fn save(&self) -> SpendableResult<()> {
        let data = self.data.read().map_err(lock_error)?;
        write_json_atomic(
            &self.path,
            &GoalData {
                goals: newest_first(&data),
            },
        )
    }

    pub fn get(&self, id: GoalId) -> SpendableResult<Option<Goal>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    pub fn find(&self, identifier: &str) -> SpendableResult<Goal> {
        let data = self.data.read().map_err(lock_error)?;
        let matches: Vec<&Goal> = data.values().filter(|g| g.id.matches(identifier)).collect();
        resolve_one("Goal", identifier, matches)
    }

    pub fn get_all(&self) -> SpendableResult<Vec<Goal>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(newest_first(&data))
    }

    /// Sum of `funded_amount` across all goals
    pub fn total_funded(&self) -> SpendableResult<Money> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().map(|g| g.funded_amount).sum())
    }

    pub fn upsert(&self, goal: Goal) -> SpendableResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(goal.id, goal);
        self.feed.publish(Arc::new(newest_first(&data)));
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> SpendableResult<Option<Goal>> {
        let mut data = self.data.write().map_err(lock_error)?;
        let removed = data.remove(&id);
        if removed.is_some() {
            self.feed.publish(Arc::new(newest_first(&data)));
        }
        Ok(removed)
    }

    pub fn subscribe(&self) -> Subscription<Arc<Vec<Goal>>> {
        self.feed.subscribe()
    }
}
