//! User CRUD handlers.
//!
//! Thin adapters from HTTP to the user service. Request bodies are passed
//! through as raw bytes so the service owns payload validation.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use userbase_core::user::User;

use crate::{handlers::AppError, state::AppState};

/// Query parameters for listing users.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// Look up the single user owning this email instead of listing.
    pub email: Option<String>,
}

/// List all users, or find one by email (GET /users, GET /users?email=...).
///
/// An unknown email answers `200` with `null`.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Response, AppError> {
    match query.email.filter(|email| !email.is_empty()) {
        Some(email) => {
            let user = state.users.fetch_by_email(&email).await?;
            Ok(Json(user).into_response())
        }
        None => {
            let users = state.users.list_all().await?;
            Ok(Json(users).into_response())
        }
    }
}

/// Get a single user by ID (GET /users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.users.fetch_by_id(&id).await?;
    Ok(Json(user))
}

/// Create a new user (POST /users).
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state.users.create(&body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user by ID (PUT /users/{id}).
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, AppError> {
    let user = state.users.update(&id, &body).await?;
    Ok(Json(user))
}

/// Delete a user by ID (DELETE /users/{id}).
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.users.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
