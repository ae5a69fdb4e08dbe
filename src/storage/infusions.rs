//! Infusion repository, persisted to `infusions.json`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::SpendableResult;
use crate::models::{Infusion, InfusionId, Money};
use crate::observe::{Feed, Subscription};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_error, resolve_one};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct InfusionData {
    #[serde(default)]
    infusions: Vec<Infusion>,
}

pub struct InfusionRepository {
    path: PathBuf,
    data: RwLock<HashMap<InfusionId, Infusion>>,
    feed: Feed<Arc<Vec<Infusion>>>,
}

fn newest_first(data: &HashMap<InfusionId, Infusion>) -> Vec<Infusion> {
    let mut list: Vec<Infusion> = data.values().cloned().collect();
    list.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.as_uuid().cmp(b.id.as_uuid())));
    list
}

impl InfusionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            feed: Feed::new("infusions", Arc::new(Vec::new())),
        }
    }

    pub fn load(&self) -> SpendableResult<()> {
        let file_data: InfusionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        data.extend(file_data.infusions.into_iter().map(|i| (i.id, i)));

        tracing::debug!(count = data.len(), "loaded infusions");
        self.feed.publish(Arc::new(newest_first(&data)));
        Ok(())
    }

    pub fn save(&self) -> SpendableResult<()> {
        let data = self.data.read().map_err(lock_error)?;
        write_json_atomic(
            &self.path,
            &InfusionData {
                infusions: newest_first(&data),
            },
        )
    }

    pub fn get(&self, id: InfusionId) -> SpendableResult<Option<Infusion>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    pub fn find(&self, identifier: &str) -> SpendableResult<Infusion> {
        let data = self.data.read().map_err(lock_error)?;
        let matches: Vec<&Infusion> = data.values().filter(|i| i.id.matches(identifier)).collect();
        resolve_one("Infusion", identifier, matches)
    }

    /// All infusions, newest first
    pub fn get_all(&self) -> SpendableResult<Vec<Infusion>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(newest_first(&data))
    }

    pub fn total(&self) -> SpendableResult<Money> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().map(|i| i.amount).sum())
    }

    pub fn upsert(&self, infusion: Infusion) -> SpendableResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(infusion.id, infusion);
        self.feed.publish(Arc::new(newest_first(&data)));
        Ok(())
    }

    pub fn delete(&self, id: InfusionId) -> SpendableResult<Option<Infusion>> {
        let mut data = self.data.write().map_err(lock_error)?;
        let removed = data.remove(&id);
        if removed.is_some() {
            self.feed.publish(Arc::new(newest_first(&data)));
        }
        Ok(removed)
    }

    pub fn subscribe(&self) -> Subscription<Arc<Vec<Infusion>>> {
        self.feed.subscribe()
    }
}
