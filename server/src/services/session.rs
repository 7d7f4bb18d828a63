//! Bearer session tokens.
//!
//! ARCHITECTURE
//! ============
//! A successful login mints a random token stored in `sessions` with an
//! expiry. Every authenticated request resolves the token back to its
//! account; expired rows never validate and are swept on creation.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::account::{Account, AccountError, role_from_column};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given account, returning the token.
///
/// # Errors
///
/// Returns an error if either the expired-row sweep or the insert fails.
pub async fn create_session(pool: &PgPool, account_id: Uuid, ttl_hours: i32) -> Result<String, sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE account_id = $1 AND expires_at <= now()")
        .bind(account_id)
        .execute(pool)
        .await?;

    let token = generate_token();
    sqlx::query(
        r"INSERT INTO sessions (token, account_id, expires_at)
          VALUES ($1, $2, now() + make_interval(hours => $3))",
    )
    .bind(&token)
    .bind(account_id)
    .bind(ttl_hours)
    .execute(pool)
    .await?;
    Ok(token)
}

/// Validate a session token and return the associated account.
/// Unknown and expired tokens yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the query fails or the stored role is unrecognized.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<Account>, AccountError> {
    let row = sqlx::query(
        r"SELECT a.id, a.role, a.email, a.name
          FROM sessions s
          JOIN accounts a ON a.id = s.account_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let role: String = row.get("role");
    Ok(Some(Account {
        id: row.get("id"),
        role: role_from_column(&role)?,
        email: row.get("email"),
        name: row.get("name"),
    }))
}

/// Delete a session by token.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
