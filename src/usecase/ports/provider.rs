use async_trait::async_trait;

use crate::domain::entities::dataset::SnapshotError;
use crate::domain::entities::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Source of the full product list. One call returns the whole dataset.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;
}
