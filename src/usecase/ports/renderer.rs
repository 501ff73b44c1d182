use async_trait::async_trait;

use crate::domain::entities::export::{ExportFormat, ExportRequest};
use crate::usecase::ports::file_sink::SaveError;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("failed to render export: {0}")]
    Render(String),
    #[error("{0} export is not supported by this renderer")]
    Unsupported(ExportFormat),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Turns a list of selected ids into the bytes of a file in the requested format.
#[async_trait]
pub trait ExportRenderer: Send + Sync {
    async fn render(&self, request: &ExportRequest) -> Result<Vec<u8>, ExportError>;
}
