pub mod dataset;
pub mod export;
pub mod notice;
pub mod record;
