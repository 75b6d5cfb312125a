use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("duplicate record id {id}")]
    Duplicate { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Anything a [`RecordStore`] can hold: cloneable and addressed by an immutable id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Read-mostly repository: records are inserted once and never mutated or removed.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Every stored record, in no particular order.
    async fn get_all(&self) -> Result<Vec<R>, RecordStoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<R>, RecordStoreError>;
    async fn insert(&self, record: R) -> Result<R, RecordStoreError>;
}

pub mod in_memory;
