//! Error types for the paint core
//!
//! A missing camera pose is not an error: the frame is skipped and the
//! controller returns `None`. Degenerate brush sizes are passed through to the
//! renderer untouched.

use thiserror::Error;

/// Main error type for the paint core
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Mutation queue closed: render side dropped its receiver")]
    QueueClosed,
}
