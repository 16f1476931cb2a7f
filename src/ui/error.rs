//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while driving the terminal
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The system browser could not be launched for a link
    #[error("Failed to open {url}: {source}")]
    LinkError {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
