use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::domain::entities::dataset::{Column, DatasetSnapshot};
use crate::domain::entities::export::{ExportFormat, ExportRequest};
use crate::usecase::ports::renderer::{ExportError, ExportRenderer};

/// Renders CSV in-process from the loaded snapshot, for use without the
/// export service. Other formats are rejected.
pub struct LocalCsvRenderer {
    columns: Vec<Column>,
    snapshot: DatasetSnapshot,
}

impl LocalCsvRenderer {
    pub fn new(columns: Vec<Column>, snapshot: DatasetSnapshot) -> Self {
        Self { columns, snapshot }
    }

    fn write_csv(&self, request: &ExportRequest) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.columns.iter().map(|column| column.header.as_str()))
            .context("failed to write csv header")?;

        for id in &request.selected_ids {
            let Some(record) = self.snapshot.find(id) else {
                continue;
            };
            let cells = self.columns.iter().map(|column| {
                record
                    .get(&column.key)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            });
            writer
                .write_record(cells)
                .with_context(|| format!("failed to write csv row for id {id}"))?;
        }

        writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!(err.to_string()))
            .context("failed to flush csv writer")
    }
}

#[async_trait]
impl ExportRenderer for LocalCsvRenderer {
    async fn render(&self, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
        if request.format != ExportFormat::Csv {
            return Err(ExportError::Unsupported(request.format));
        }
        self.write_csv(request)
            .map_err(|err| ExportError::Render(format!("{err:#}")))
    }
}
