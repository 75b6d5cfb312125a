use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error("rejected: {0}")]
    Rejected(String),

    #[error("conflict: {0}")]
    Conflict(String),
}
