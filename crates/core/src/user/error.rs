use thiserror::Error;

/// Errors returned by user record operations.
///
/// One variant per failure kind, so callers can branch exhaustively.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid user data: {0}")]
    InvalidPayload(String),
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Failed to fetch record: {0}")]
    FetchFailed(String),
    #[error("Failed to unmarshal record: {0}")]
    UnmarshalFailed(String),
    #[error("Could not marshal item: {0}")]
    MarshalFailed(String),
    #[error("Could not put item: {0}")]
    WriteFailed(String),
    #[error("Could not delete item: {0}")]
    DeleteFailed(String),
    #[error("User does not exist: {id}")]
    DoesNotExist { id: String },
    #[error("User already exists with email: {email}")]
    AlreadyExists { email: String },
}

/// Result type for user record operations.
pub type Result<T> = std::result::Result<T, UserError>;
