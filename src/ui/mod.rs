#[cfg(feature = "desktop")]
pub mod app;
pub mod format;
pub mod services;
#[cfg(feature = "desktop")]
pub mod state;
