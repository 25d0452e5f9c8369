use thiserror::Error;

/// Errors emitted while reading or validating the navigation file.
#[derive(Debug, Error)]
pub(crate) enum NavigationError {
    /// Filesystem operation failed.
    #[error("navigation IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("navigation JSON failed")]
    Json(#[from] serde_json::Error),
    /// The file parsed but its content is unusable.
    #[error("validation error: {message}")]
    Validation { message: String },
}
