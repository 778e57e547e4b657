use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::users::{create_user, delete_user, get_user, list_users, update_user},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, response::Response};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::service::{ServiceConfig, UserService};
    use crate::storage::InMemoryStore;

    fn test_app() -> Router {
        let service = UserService::new(
            Arc::new(InMemoryStore::new()),
            ServiceConfig {
                email_index: "emailIndex".to_string(),
            },
        );
        create_app(AppState::new(service))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &Router, email: &str) -> String {
        let body = format!(r#"{{"email":"{email}","firstName":"Test","lastName":"Tester","dob":"1/1/2001"}}"#);
        let response = send(app, "POST", "/users", Some(&body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let app = test_app();

        let id = create(&app, "john@example.com").await;
        let response = send(&app, "GET", &format!("/users/{id}"), None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let user = json_body(response).await;
        assert_eq!(user["id"], id.as_str());
        assert_eq!(user["email"], "john@example.com");
        assert_eq!(user["firstName"], "Test");
        assert_eq!(user["dob"], "1/1/2001");
    }

    #[tokio::test]
    async fn test_get_nonexistent_user() {
        let app = test_app();

        let response = send(&app, "GET", "/users/nonexistent", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"], "User does not exist: nonexistent");
    }

    #[tokio::test]
    async fn test_list_users() {
        let app = test_app();
        create(&app, "a@example.com").await;
        create(&app, "b@example.com").await;

        let response = send(&app, "GET", "/users", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let users = json_body(response).await;
        assert_eq!(users.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_by_email() {
        let app = test_app();
        let id = create(&app, "a@example.com").await;

        let response = send(&app, "GET", "/users?email=a@example.com", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_get_user_by_unknown_email_is_null() {
        let app = test_app();

        let response = send(&app, "GET", "/users?email=x@example.com", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(json_body(response).await.is_null());
    }

    #[tokio::test]
    async fn test_create_malformed_body() {
        let app = test_app();

        let response = send(&app, "POST", "/users", Some("{not json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_invalid_email() {
        let app = test_app();

        let response = send(&app, "POST", "/users", Some(r#"{"email":"bobmail.com"}"#)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Invalid email: bobmail.com");
    }

    #[tokio::test]
    async fn test_create_duplicate_email_conflicts() {
        let app = test_app();
        create(&app, "a@example.com").await;

        let response = send(&app, "POST", "/users", Some(r#"{"email":"a@example.com"}"#)).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_user() {
        let app = test_app();
        let id = create(&app, "a@example.com").await;

        let response = send(
            &app,
            "PUT",
            &format!("/users/{id}"),
            Some(r#"{"email":"a2@example.com","firstName":"New"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let user = json_body(response).await;
        assert_eq!(user["id"], id.as_str());
        assert_eq!(user["email"], "a2@example.com");
        assert_eq!(user["firstName"], "New");
    }

    #[tokio::test]
    async fn test_update_conflicting_email() {
        let app = test_app();
        let a = create(&app, "a@example.com").await;
        create(&app, "b@example.com").await;

        let response = send(
            &app,
            "PUT",
            &format!("/users/{a}"),
            Some(r#"{"email":"b@example.com"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_nonexistent_user() {
        let app = test_app();

        let response = send(
            &app,
            "PUT",
            "/users/missing",
            Some(r#"{"email":"a@example.com"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let app = test_app();
        let id = create(&app, "a@example.com").await;

        let response = send(&app, "DELETE", &format!("/users/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Deleting again still succeeds
        let response = send(&app, "DELETE", &format!("/users/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", &format!("/users/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let app = test_app();

        let response = send(&app, "PATCH", "/users", None).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
