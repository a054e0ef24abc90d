//! Error types for the viewer shell
//!
//! Terrain, mesh and camera code never fails; only startup, config loading and
//! frame acquisition report errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Adapter, device or surface setup failed, or a frame could not be acquired
    #[error("GPU error: {0}")]
    Gpu(String),

    /// Window or event loop creation failed
    #[error("Window error: {0}")]
    Window(String),

    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for a `ViewerConfig`
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// Well-formed config with values the viewer cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
