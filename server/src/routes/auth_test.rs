use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderValue, Request};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::state::test_helpers::{test_app_state, test_app_state_with, test_config};

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = crate::routes::app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// parse_role
// =============================================================================

#[test]
fn parse_role_accepts_slugs() {
    assert_eq!(parse_role("student").ok(), Some(Role::Student));
    assert_eq!(parse_role("admin").ok(), Some(Role::Admin));
}

#[test]
fn parse_role_unknown_is_not_found() {
    let err = parse_role("janitor").unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn parse_role_is_case_sensitive() {
    assert!(parse_role("Faculty").is_err());
}

// =============================================================================
// bearer_token
// =============================================================================

#[test]
fn bearer_token_extracts_value() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
    assert_eq!(bearer_token(&headers), Some("abc123"));
}

#[test]
fn bearer_token_scheme_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer xyz"));
    assert_eq!(bearer_token(&headers), Some("xyz"));
}

#[test]
fn bearer_token_rejects_other_schemes_and_blanks() {
    let mut headers = HeaderMap::new();
    assert_eq!(bearer_token(&headers), None);
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
    assert_eq!(bearer_token(&headers), None);
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
    assert_eq!(bearer_token(&headers), None);
}

// =============================================================================
// require_fields
// =============================================================================

#[test]
fn require_fields_rejects_blank_email_or_empty_password() {
    assert!(require_fields("  ", "pw").is_err());
    assert!(require_fields("a@b.c", "").is_err());
    assert!(require_fields("a@b.c", "pw").is_ok());
}

// =============================================================================
// HANDLERS (paths that fail before touching the database)
// =============================================================================

#[tokio::test]
async fn login_unknown_role_is_404() {
    let request = post_json("/api/janitor/login", &json!({"email": "a@b.c", "password": "pw"}));
    let (status, body) = send(test_app_state(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("unknown role: janitor"));
}

#[tokio::test]
async fn login_empty_fields_is_400() {
    let request = post_json("/api/student/login", &json!({"email": "", "password": ""}));
    let (status, body) = send(test_app_state(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Please fill in all fields"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn login_missing_fields_is_400() {
    let request = post_json("/api/faculty/login", &json!({}));
    let (status, _) = send(test_app_state(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_disabled_is_403() {
    let mut config = test_config();
    config.allow_registration = false;
    let request = post_json("/api/student/register", &json!({"email": "a@b.c", "password": "pw"}));
    let (status, body) = send(test_app_state_with(config), request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], json!("Registration is disabled"));
}

#[tokio::test]
async fn register_empty_fields_is_400() {
    let request = post_json("/api/admin/register", &json!({"email": "a@b.c", "password": ""}));
    let (status, _) = send(test_app_state(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_without_bearer_is_401() {
    let request = Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap();
    let (status, body) = send(test_app_state(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Missing bearer token"));
}

#[tokio::test]
async fn logout_without_bearer_is_401() {
    let request = Request::builder().method("POST").uri("/api/auth/logout").body(Body::empty()).unwrap();
    let (status, _) = send(test_app_state(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn healthz_is_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let (status, _) = send(test_app_state(), request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_reports_server_up() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = crate::routes::app(test_app_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"College portal server is up");
}

// =============================================================================
// ApiError
// =============================================================================

#[test]
fn account_errors_map_to_statuses() {
    use crate::services::account::AccountError;
    assert_eq!(ApiError::from(AccountError::InvalidCredentials).status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::from(AccountError::AlreadyExists).status(), StatusCode::CONFLICT);
    assert_eq!(ApiError::from(AccountError::InvalidEmail).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::from(AccountError::Hash("boom".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn invalid_credentials_message_is_generic() {
    let err = ApiError::from(crate::services::account::AccountError::InvalidCredentials);
    assert_eq!(err.to_string(), "Invalid email or password");
}
