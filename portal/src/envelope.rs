//! Login response envelopes.
//!
//! The server answers with a single canonical shape:
//!
//! ```json
//! { "success": true, "message": "Login successful", "data": { "token": "...", "role": "Student" } }
//! ```
//!
//! Older deployments wrapped the payload twice (`data.data.token`) or
//! returned a bare `token`. [`extract_token`] still accepts both as legacy
//! shims. Remove them once every deployment serves the canonical shape.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::role::Role;

/// Canonical response envelope emitted by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self { success: true, message: message.into(), data: Some(data) }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), data: None }
    }
}

/// Payload of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub token: String,
    pub role: Role,
}

/// Token lookup paths in precedence order. The first non-empty string wins.
const TOKEN_PATHS: [&[&str]; 3] = [&["data", "data", "token"], &["data", "token"], &["token"]];

/// Message lookup paths in precedence order.
const MESSAGE_PATHS: [&[&str]; 2] = [&["message"], &["data", "message"]];

/// Find the session token in a login response body.
///
/// Precedence: `data.data.token` (legacy), `data.token` (canonical),
/// `token` (legacy). Empty strings and non-string values are skipped.
#[must_use]
pub fn extract_token(body: &Value) -> Option<&str> {
    first_string(body, &TOKEN_PATHS)
}

/// Find a human-readable message in a response body (`message`, then
/// `data.message`).
#[must_use]
pub fn extract_message(body: &Value) -> Option<&str> {
    first_string(body, &MESSAGE_PATHS)
}

fn first_string<'a>(body: &'a Value, paths: &[&[&str]]) -> Option<&'a str> {
    paths.iter().find_map(|path| {
        path.iter()
            .try_fold(body, |node, key| node.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}
