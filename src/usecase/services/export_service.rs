use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::domain::entities::export::{ExportFormat, ExportRequest};
use crate::usecase::ports::file_sink::FileSink;
use crate::usecase::ports::renderer::{ExportError, ExportRenderer};
use crate::usecase::services::notices::Notices;
use crate::usecase::services::view_state::ViewStateController;

pub const NOTHING_SELECTED: &str = "No rows selected";
pub const EXPORT_IN_PROGRESS: &str = "An export is already in progress";
pub const EXPORT_FAILED: &str = "Failed to export data. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Pending {
        ticket: ExportTicket,
        format: ExportFormat,
    },
    Succeeded {
        format: ExportFormat,
        path: PathBuf,
    },
    Failed {
        format: ExportFormat,
        message: String,
    },
}

/// A claimed export slot: the request to submit and the ticket to finish it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub ticket: ExportTicket,
    pub request: ExportRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStart {
    Started(ExportJob),
    NothingSelected,
    AlreadyPending,
}

/// Tracks the single in-flight export and turns outcomes into notices.
#[derive(Debug, Clone, Default)]
pub struct ExportCoordinator {
    state: ExportState,
    next_ticket: u64,
}

impl ExportCoordinator {
    pub fn state(&self) -> &ExportState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ExportState::Pending { .. })
    }

    /// Claims the in-flight slot for `format` using the current selection.
    /// Nothing is claimed when the selection is empty or another export is
    /// still pending.
    pub fn begin(
        &mut self,
        format: ExportFormat,
        view: &ViewStateController,
        notices: &mut Notices,
    ) -> ExportStart {
        if self.is_pending() {
            warn!(%format, "export requested while another is pending");
            notices.info(EXPORT_IN_PROGRESS);
            return ExportStart::AlreadyPending;
        }

        let selected_ids = view.selected_ids();
        if selected_ids.is_empty() {
            notices.info(NOTHING_SELECTED);
            return ExportStart::NothingSelected;
        }

        self.next_ticket += 1;
        let ticket = ExportTicket(self.next_ticket);
        self.state = ExportState::Pending { ticket, format };
        info!(%format, rows = selected_ids.len(), "export started");
        ExportStart::Started(ExportJob {
            ticket,
            request: ExportRequest {
                format,
                selected_ids,
            },
        })
    }

    /// Records the outcome of the job holding `ticket`. Outcomes for any other
    /// ticket are dropped and `false` is returned.
    pub fn finish(
        &mut self,
        ticket: ExportTicket,
        outcome: Result<PathBuf, ExportError>,
        notices: &mut Notices,
    ) -> bool {
        let format = match &self.state {
            ExportState::Pending {
                ticket: pending,
                format,
            } if *pending == ticket => *format,
            _ => {
                warn!(ticket = ticket.0, "discarding stale export result");
                return false;
            }
        };

        match outcome {
            Ok(path) => {
                info!(%format, path = %path.display(), "export saved");
                notices.success(format!("Exported to {}", path.display()));
                self.state = ExportState::Succeeded { format, path };
            }
            Err(err) => {
                error!(%format, error = %err, "error exporting data");
                notices.error(EXPORT_FAILED);
                self.state = ExportState::Failed {
                    format,
                    message: err.to_string(),
                };
            }
        }
        true
    }

    /// Runs a whole export: claim, render, save, finish.
    pub async fn request_export(
        &mut self,
        format: ExportFormat,
        view: &ViewStateController,
        renderer: &dyn ExportRenderer,
        sink: &dyn FileSink,
        notices: &mut Notices,
    ) -> ExportStart {
        let start = self.begin(format, view, notices);
        if let ExportStart::Started(job) = &start {
            let outcome = run_export(&job.request, renderer, sink).await;
            self.finish(job.ticket, outcome, notices);
        }
        start
    }
}

/// Submits `request` and saves the returned payload as `data.<format>`.
pub async fn run_export(
    request: &ExportRequest,
    renderer: &dyn ExportRenderer,
    sink: &dyn FileSink,
) -> Result<PathBuf, ExportError> {
    let payload = renderer.render(request).await?;
    let path = sink.save(&request.format.file_name(), &payload)?;
    Ok(path)
}
