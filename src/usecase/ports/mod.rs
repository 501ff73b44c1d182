pub mod file_sink;
pub mod provider;
pub mod renderer;
