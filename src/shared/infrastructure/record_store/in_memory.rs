// In memory implementation of the RecordStore port.
//
// Purpose
// - Back the portal for local development and tests without a database.
//
// Responsibilities
// - Keep records in a map keyed by id.
// - Serialize inserts behind the write lock; reads share the read lock.

use crate::shared::infrastructure::record_store::{Record, RecordStore, RecordStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<R: Record> {
    inner: RwLock<HashMap<String, R>>,
    is_offline: bool,
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: impl IntoIterator<Item = R>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        Self {
            inner: RwLock::new(map),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn get_all(&self) -> Result<Vec<R>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<R>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(id).cloned())
    }

    async fn insert(&self, record: R) -> Result<R, RecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.contains_key(record.id()) {
            return Err(RecordStoreError::Duplicate {
                id: record.id().to_string(),
            });
        }
        guard.insert(record.id().to_string(), record.clone());
        Ok(record)
    }
}
