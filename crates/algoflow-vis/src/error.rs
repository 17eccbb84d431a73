//! Error types for the visualizer server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid message: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] algoflow_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
