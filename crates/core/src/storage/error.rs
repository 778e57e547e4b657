use thiserror::Error;

/// Errors raised by a record store backend.
///
/// These carry no business meaning; the user service decides what a failed
/// read or write means for the operation in progress.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
