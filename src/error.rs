//! Crate error type.

use crate::config::ConfigError;

/// Errors from loading input around the renderer. Rendering itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("invalid analysis response: {0}")]
    Response(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
