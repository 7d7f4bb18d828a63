//! REST API helpers for communicating with the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are reported as `portal::TransportError` values and never
//! panic; the login controller turns them into user-facing messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portal::{Credentials, LoginApi, LoginController, Role, TransportError};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::util::storage::{BrowserStorage, session_store};

fn login_endpoint(api_base: &str, role: Role) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), role.login_path())
}

fn logout_endpoint(api_base: &str) -> String {
    format!("{}/auth/logout", api_base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `POST {api_base}/{role}/login` over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpLoginApi {
    api_base: String,
}

impl HttpLoginApi {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl LoginApi for HttpLoginApi {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Value, TransportError> {
        let url = login_endpoint(&self.api_base, role);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| TransportError::network(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::network(e.to_string()))?;
            // A 2xx body that is not JSON is treated as "no token".
            let body = resp.json::<Value>().await.ok();
            if !resp.ok() {
                return Err(TransportError::status(resp.status(), body));
            }
            Ok(body.unwrap_or(Value::Null))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(TransportError::network("not available on server"))
        }
    }
}

/// Login controller wired to the browser: HTTP backend + `localStorage`.
#[must_use]
pub fn login_controller(config: &ClientConfig) -> LoginController<HttpLoginApi, BrowserStorage> {
    LoginController::new(config.login, HttpLoginApi::new(config.api_base.clone()), session_store())
}

/// Revoke a session token server-side via `POST {api_base}/auth/logout`.
/// Best-effort: the local session is cleared regardless of the outcome.
pub async fn logout(api_base: &str, token: &str) {
    let url = logout_endpoint(api_base);
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token);
    }
}
