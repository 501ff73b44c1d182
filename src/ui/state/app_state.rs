use dioxus::prelude::{use_signal, Signal};

use crate::config::AppConfig;
use crate::usecase::services::export_service::ExportCoordinator;
use crate::usecase::services::notices::Notices;
use crate::usecase::services::view_state::ViewStateController;

pub struct AppState {
    pub view: Signal<ViewStateController>,
    pub exports: Signal<ExportCoordinator>,
    pub notices: Signal<Notices>,
    pub goto_input: Signal<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let page_size = config.page_size();
        Self {
            view: use_signal(move || ViewStateController::default().with_page_size(page_size)),
            exports: use_signal(ExportCoordinator::default),
            notices: use_signal(Notices::default),
            goto_input: use_signal(|| "1".to_string()),
        }
    }
}
