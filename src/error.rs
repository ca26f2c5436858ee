//! Error types for the portfolio builder.
//!
//! Nothing here reaches the end user: request handlers degrade to a
//! placeholder or an unchanged form. Only startup failures leave `main`.

use thiserror::Error;

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The renderer did not signal completion within the settle bound
    #[error("Render did not settle within {0}ms")]
    RenderTimeout(u64),

    /// The render task ended without delivering a fragment
    #[error("Render task ended without producing output")]
    RenderAborted,

    /// An uploaded file could not be accepted as an image
    #[error("Rejected upload: {0}")]
    InvalidUpload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
