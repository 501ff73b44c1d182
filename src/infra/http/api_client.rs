//! HTTP client for the inventory backend.
//!
//! Implements both remote ports: the product list (`GET /api/products`) and
//! the export renderer (`POST /export/{format}`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::entities::export::{ExportFormat, ExportRequest};
use crate::domain::entities::record::Record;
use crate::usecase::ports::provider::{DataProvider, FetchError};
use crate::usecase::ports::renderer::{ExportError, ExportRenderer};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    pub fn export_url(&self, format: ExportFormat) -> String {
        format!("{}/export/{}", self.base_url, format.as_str())
    }
}

#[async_trait]
impl DataProvider for ApiClient {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        let url = self.products_url();
        debug!(%url, "requesting products");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

#[async_trait]
impl ExportRenderer for ApiClient {
    async fn render(&self, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
        let url = self.export_url(request.format);
        debug!(%url, rows = request.selected_ids.len(), "requesting export");

        let response = self
            .client
            .post(&url)
            .json(&request.body())
            .send()
            .await
            .map_err(|err| ExportError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::Status {
                status: status.as_u16(),
            });
        }

        let payload = response
            .bytes()
            .await
            .map_err(|err| ExportError::Transport(err.to_string()))?;
        Ok(payload.to_vec())
    }
}
