//! Generator boundary errors.

use thiserror::Error;

/// Errors that can occur handing a plan to a build-graph generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generator rejected target '{target}': {detail}")]
    Rejected { target: String, detail: String },

    #[error("plan serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
