//! Login controller: validation, optional admin bypass, backend call,
//! response normalization, and session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser login page and the CLI both drive [`LoginController::submit`]
//! and only differ in how they reach the backend ([`LoginApi`]) and where
//! the session lives ([`Storage`]).
//!
//! FAILURE SEMANTICS
//! =================
//! Every error is terminal for one submission and leaves the stored session
//! untouched. There is no retry; the caller keeps the form usable so the
//! user can resubmit.

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::envelope;
use crate::role::Role;
use crate::session::{Session, SessionStore, Storage};

/// Token stored when the admin bypass fabricates a session.
pub const DEV_BYPASS_TOKEN: &str = "dev-admin-bypass-token";

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";
pub const BYPASS_NOTICE: &str = "Admin bypassed (DEV). Redirecting to admin dashboard...";

/// Email and password as typed. Never persisted.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Presence check only: no email shape or password strength rules.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Validation`] if either field is empty.
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginError::Validation);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login behavior switches, injected at startup from build or deploy config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginConfig {
    /// Skip the backend for Admin logins and store [`DEV_BYPASS_TOKEN`].
    /// Development only; defaults to off.
    pub dev_bypass_admin: bool,
}

impl LoginConfig {
    /// Whether a submission for `role` takes the bypass path.
    #[must_use]
    pub fn bypasses(self, role: Role) -> bool {
        self.dev_bypass_admin && role == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    Validation,
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Transport(String),
    #[error("could not save session: {0}")]
    Storage(String),
}

/// Failure reported by a [`LoginApi`] implementation.
///
/// `status` is set for non-2xx responses; `body` holds the response JSON
/// when it could be parsed; `message` is the transport-level description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportError {
    pub status: Option<u16>,
    pub body: Option<Value>,
    pub message: String,
}

impl TransportError {
    /// Connection-level failure with no response.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self { status: None, body: None, message: message.into() }
    }

    /// Non-2xx response.
    #[must_use]
    pub fn status(status: u16, body: Option<Value>) -> Self {
        Self { status: Some(status), body, message: format!("request failed with status {status}") }
    }

    fn into_login_error(self) -> LoginError {
        if let Some(message) = self.body.as_ref().and_then(envelope::extract_message) {
            return LoginError::Authentication(message.to_owned());
        }
        if self.message.is_empty() {
            return LoginError::Transport(LOGIN_FAILED.to_owned());
        }
        LoginError::Transport(self.message)
    }
}

/// Role-scoped login endpoint: `POST {base}/{role}/login` with a JSON
/// credentials body. Returns the parsed JSON body of a 2xx response.
#[allow(async_fn_in_trait)]
pub trait LoginApi {
    /// # Errors
    ///
    /// Returns a [`TransportError`] for connection failures and non-2xx
    /// responses.
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Value, TransportError>;
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub session: Session,
    pub redirect: String,
    pub notice: &'static str,
    pub bypassed: bool,
}

pub struct LoginController<A, B> {
    config: LoginConfig,
    api: A,
    store: SessionStore<B>,
}

impl<A: LoginApi, B: Storage> LoginController<A, B> {
    pub fn new(config: LoginConfig, api: A, store: SessionStore<B>) -> Self {
        Self { config, api, store }
    }

    pub fn config(&self) -> LoginConfig {
        self.config
    }

    pub fn store(&self) -> &SessionStore<B> {
        &self.store
    }

    /// Route to redirect to when a session already exists. The login view
    /// is a guard: with a session present it never renders the form.
    pub fn bootstrap_redirect(&self) -> Option<String> {
        self.store.get().map(|session| session.home_route())
    }

    /// Run one login attempt for `role`.
    ///
    /// # Errors
    ///
    /// - [`LoginError::Validation`] when a field is empty (no network call).
    /// - [`LoginError::Authentication`] when the response carries no token,
    ///   or the backend rejected the request with a message.
    /// - [`LoginError::Transport`] when the backend could not be reached or
    ///   failed without a message.
    /// - [`LoginError::Storage`] when the session could not be persisted.
    pub async fn submit(&self, role: Role, credentials: &Credentials) -> Result<LoginSuccess, LoginError> {
        credentials.validate()?;

        if self.config.bypasses(role) {
            let session = Session::new(DEV_BYPASS_TOKEN, Role::Admin);
            return self.finish(session, BYPASS_NOTICE, true);
        }

        let body = self
            .api
            .login(role, credentials)
            .await
            .map_err(TransportError::into_login_error)?;

        let Some(token) = envelope::extract_token(&body) else {
            let message = envelope::extract_message(&body).unwrap_or(LOGIN_FAILED);
            return Err(LoginError::Authentication(message.to_owned()));
        };

        self.finish(Session::new(token, role), LOGIN_SUCCESSFUL, false)
    }

    /// Clear the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Storage`] if the backend rejects the removal.
    pub fn logout(&self) -> Result<(), LoginError> {
        self.store.clear().map_err(|e| LoginError::Storage(e.to_string()))
    }

    fn finish(&self, session: Session, notice: &'static str, bypassed: bool) -> Result<LoginSuccess, LoginError> {
        self.store
            .set(&session)
            .map_err(|e| LoginError::Storage(e.to_string()))?;
        let redirect = session.home_route();
        Ok(LoginSuccess { session, redirect, notice, bypassed })
    }
}
