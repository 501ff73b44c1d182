pub mod export_service;
pub mod notices;
pub mod selection;
pub mod view_state;
