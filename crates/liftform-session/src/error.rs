//! Session and sample-loading errors.

/// Result alias for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors raised while loading samples or running a live session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading a sample file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sample document is not valid JSON.
    #[error("Sample decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The sample decoded but does not form a usable pose series.
    #[error("Invalid sample: {0}")]
    InvalidSample(String),
}
