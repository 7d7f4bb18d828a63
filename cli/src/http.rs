//! HTTP client for the portal auth API.

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use portal::{Credentials, LoginApi, Role, TransportError};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::CliError;

/// `{base}/api`, with any trailing slash on `base` dropped.
pub fn api_base(base_url: &str) -> String {
    format!("{}/api", base_url.trim_end_matches('/'))
}

pub fn login_url(base_url: &str, role: Role) -> String {
    format!("{}{}", api_base(base_url), role.login_path())
}

pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), client: reqwest::Client::new() }
    }

    pub async fn healthz(&self) -> Result<(), CliError> {
        let url = format!("{}/healthz", self.base_url.trim_end_matches('/'));
        let status = self.client.get(url).send().await?.status();
        if !status.is_success() {
            return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
        }
        Ok(())
    }

    /// `GET /api/auth/me` with the session's bearer token.
    pub async fn me(&self, token: &str) -> Result<Value, CliError> {
        let url = format!("{}/auth/me", api_base(&self.base_url));
        let response = self.client.get(url).header(AUTHORIZATION, format!("Bearer {token}")).send().await?;
        let status = response.status();
        let value = response.json::<Value>().await.unwrap_or(Value::Null);
        if !status.is_success() {
            let message = portal::envelope::extract_message(&value).unwrap_or("request failed").to_owned();
            return Err(CliError::ServerError { status: status.as_u16(), message });
        }
        Ok(value)
    }

    /// `POST /api/auth/logout`. The server answers 204 on success.
    pub async fn logout(&self, token: &str) -> Result<(), CliError> {
        let url = format!("{}/auth/logout", api_base(&self.base_url));
        let status = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?
            .status();
        if !status.is_success() {
            return Err(CliError::ServerError { status: status.as_u16(), message: "logout failed".to_owned() });
        }
        Ok(())
    }
}

impl LoginApi for &HttpApi {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(login_url(&self.base_url, role))
            .json(credentials)
            .send()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await.ok();
        if !status.is_success() {
            return Err(TransportError::status(status.as_u16(), body));
        }
        Ok(body.unwrap_or(Value::Null))
    }
}
