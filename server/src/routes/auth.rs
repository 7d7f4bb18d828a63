//! Auth routes: per-role login and registration, bearer session lookup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::{FromRef, FromRequestParts, Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use portal::Role;
use portal::envelope::{Envelope, TokenData};
use portal::login::{FILL_ALL_FIELDS, LOGIN_SUCCESSFUL};
use serde::Deserialize;

use super::error::ApiError;
use crate::services::account::{self, Account};
use crate::services::session;
use crate::state::AppState;

const REGISTRATION_SUCCESSFUL: &str = "Registration successful";

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    name: Option<String>,
}

/// Resolve the `{role}` path segment. Unknown roles are a 404, not a 400,
/// so `/api/janitor/login` looks like any other missing route.
pub(crate) fn parse_role(segment: &str) -> Result<Role, ApiError> {
    Role::from_slug(segment).ok_or_else(|| ApiError::NotFound(format!("unknown role: {segment}")))
}

fn require_fields(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(FILL_ALL_FIELDS.into()));
    }
    Ok(())
}

/// Token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated account resolved from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthAccount {
    pub account: Account,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthAccount
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(ApiError::Unauthorized("Missing bearer token".into()));
        };

        let app_state = AppState::from_ref(state);
        let account = session::validate_session(&app_state.pool, token)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Session expired or invalid".into()))?;

        Ok(Self { account, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/{role}/login`: check credentials, mint a session token.
pub async fn login(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Envelope<TokenData>>, ApiError> {
    let role = parse_role(&segment)?;
    require_fields(&body.email, &body.password)?;

    let account = match account::authenticate(&state.pool, role, &body.email, &body.password).await {
        Ok(account) => account,
        Err(e) => {
            tracing::info!(role = role.slug(), error = %e, "login rejected");
            return Err(e.into());
        }
    };
    let token = session::create_session(&state.pool, account.id, state.config.session_ttl_hours).await?;

    tracing::info!(role = role.slug(), account_id = %account.id, "login succeeded");
    Ok(Json(Envelope::ok(LOGIN_SUCCESSFUL, TokenData { token, role })))
}

/// `POST /api/{role}/register`: create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Envelope<TokenData>>), ApiError> {
    let role = parse_role(&segment)?;
    if !state.config.allow_registration {
        return Err(ApiError::Forbidden("Registration is disabled".into()));
    }
    require_fields(&body.email, &body.password)?;

    let account =
        account::create_account(&state.pool, role, &body.email, &body.password, body.name.as_deref()).await?;
    let token = session::create_session(&state.pool, account.id, state.config.session_ttl_hours).await?;

    tracing::info!(role = role.slug(), account_id = %account.id, "account registered");
    Ok((StatusCode::CREATED, Json(Envelope::ok(REGISTRATION_SUCCESSFUL, TokenData { token, role }))))
}

/// `GET /api/auth/me`: return the current account.
pub async fn me(auth: AuthAccount) -> Json<Envelope<Account>> {
    Json(Envelope::ok("OK", auth.account))
}

/// `POST /api/auth/logout`: delete the session.
pub async fn logout(State(state): State<AppState>, auth: AuthAccount) -> Result<StatusCode, ApiError> {
    session::delete_session(&state.pool, &auth.token).await?;
    tracing::info!(account_id = %auth.account.id, "logged out");
    Ok(StatusCode::NO_CONTENT)
}
