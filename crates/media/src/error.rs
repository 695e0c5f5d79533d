use std::time::Duration;

/// Errors that can occur during blob storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key cannot be stored by this backend.
    #[error("invalid blob key: {0}")]
    InvalidKey(String),

    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote object store rejected or failed the request.
    #[error("object store error: {0}")]
    Backend(String),

    /// The call did not finish within the configured bound.
    #[error("storage call for {key} timed out after {}s", .after.as_secs())]
    Timeout { key: String, after: Duration },
}
