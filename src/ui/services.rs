use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::{AppConfig, RendererKind};
use crate::infra::export::csv::LocalCsvRenderer;
use crate::infra::files::download::DownloadDirSink;
use crate::infra::http::api_client::ApiClient;
use crate::usecase::ports::file_sink::FileSink;
use crate::usecase::ports::provider::DataProvider;
use crate::usecase::ports::renderer::ExportRenderer;
use crate::usecase::services::view_state::ViewStateController;

/// Collaborators handed to the shell through the root context.
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub provider: Arc<dyn DataProvider>,
    pub remote_renderer: Arc<dyn ExportRenderer>,
    pub sink: Arc<dyn FileSink>,
}

impl AppServices {
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let client = Arc::new(
            ApiClient::new(config.api_base_url.clone(), config.request_timeout())
                .context("failed to build http client")?,
        );
        let download_dir = config.resolve_download_dir()?;
        Ok(Self {
            config,
            provider: client.clone(),
            remote_renderer: client,
            sink: Arc::new(DownloadDirSink::new(download_dir)),
        })
    }

    /// Renderer for the next export. The local renderer captures the current
    /// snapshot so later reloads do not change what gets written.
    pub fn renderer_for(&self, view: &ViewStateController) -> Arc<dyn ExportRenderer> {
        match self.config.export_renderer {
            RendererKind::Remote => self.remote_renderer.clone(),
            RendererKind::Local => Arc::new(LocalCsvRenderer::new(
                view.columns().to_vec(),
                view.snapshot().clone(),
            )),
        }
    }
}
