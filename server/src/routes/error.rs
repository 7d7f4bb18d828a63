//! JSON error responses for the REST API.
//!
//! Every failure leaves the server as `{ "success": false, "message": "..." }`
//! so the login client can surface `message` verbatim.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portal::envelope::Envelope;
use serde_json::Value;

use crate::services::account::AccountError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body: Envelope<Value> = Envelope::failure(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidEmail => Self::BadRequest("Invalid email".into()),
            AccountError::EmptyPassword => Self::BadRequest(portal::login::FILL_ALL_FIELDS.into()),
            AccountError::AlreadyExists => Self::Conflict("Account already exists".into()),
            AccountError::InvalidCredentials => Self::Unauthorized("Invalid email or password".into()),
            AccountError::Hash(e) => {
                tracing::error!(error = %e, "password hashing failed");
                Self::Internal
            }
            AccountError::Db(e) => e.into(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        Self::Internal
    }
}
