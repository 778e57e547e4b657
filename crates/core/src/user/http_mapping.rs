//! Pure functions for mapping user errors to HTTP status codes.
//!
//! Every [`UserError`] variant maps to a status; the match is exhaustive so a
//! new variant cannot be added without choosing its response.

use super::UserError;

/// Maps a [`UserError`] to an HTTP status code.
///
/// - `InvalidPayload` -> 400 (Bad Request)
/// - `InvalidEmail` -> 400 (Bad Request)
/// - `DoesNotExist` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `FetchFailed` -> 503 (Service Unavailable)
/// - `UnmarshalFailed`, `MarshalFailed`, `WriteFailed`, `DeleteFailed` -> 500
///
/// # Examples
///
/// ```
/// use userbase_core::user::{UserError, user_error_to_status_code};
///
/// let error = UserError::DoesNotExist {
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(user_error_to_status_code(&error), 404);
/// ```
pub fn user_error_to_status_code(error: &UserError) -> u16 {
    match error {
        UserError::InvalidPayload(_) => 400,
        UserError::InvalidEmail(_) => 400,
        UserError::DoesNotExist { .. } => 404,
        UserError::AlreadyExists { .. } => 409,
        UserError::FetchFailed(_) => 503,
        UserError::UnmarshalFailed(_) => 500,
        UserError::MarshalFailed(_) => 500,
        UserError::WriteFailed(_) => 500,
        UserError::DeleteFailed(_) => 500,
    }
}
