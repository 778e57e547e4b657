use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use userbase_core::user::{user_error_to_status_code, UserError};

/// Handler error wrapping a `UserError`.
///
/// Renders as `{"error": "<message>"}` with the status chosen by
/// `user_error_to_status_code`.
#[derive(Debug)]
pub struct AppError(pub UserError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(user_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "API error");
        } else {
            tracing::warn!(status = %status, error = %self.0, "API error");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        Self(err)
    }
}
