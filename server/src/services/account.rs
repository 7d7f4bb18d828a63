//! Portal accounts: registration and password authentication.
//!
//! An account belongs to exactly one role. The same email may hold separate
//! student, faculty, and admin accounts; lookups are always `(role, email)`.
//! Emails are stored trimmed and lower-cased.

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;

use portal::Role;
use sqlx::{PgPool, Row};
use tokio::sync::OnceCell;
use uuid::Uuid;

/// Hash checked when no account matches, so unknown emails cost a bcrypt
/// verify like known ones.
static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

#[cfg(test)]
thread_local! {
    static VERIFY_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password is required")]
    EmptyPassword,
    #[error("account already exists")]
    AlreadyExists,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Account row without the password hash.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Account {
    pub id: Uuid,
    pub role: Role,
    pub email: String,
    pub name: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Local part of the email, used when registration omits a name.
pub(crate) fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user")
        .to_owned()
}

/// Parse a stored role column back into a [`Role`].
pub(crate) fn role_from_column(raw: &str) -> Result<Role, AccountError> {
    Role::from_slug(raw).ok_or_else(|| AccountError::Db(sqlx::Error::Decode(format!("unknown role {raw:?}").into())))
}

/// Hash a password with bcrypt off the async runtime.
///
/// # Errors
///
/// [`AccountError::Hash`] if bcrypt fails or the blocking task panics.
pub async fn hash_password(password: &str) -> Result<String, AccountError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AccountError::Hash(e.to_string()))?
        .map_err(|e| AccountError::Hash(e.to_string()))
}

/// Verify a password against a bcrypt hash off the async runtime.
/// A malformed stored hash counts as a mismatch.
///
/// # Errors
///
/// [`AccountError::Hash`] if the blocking task panics.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AccountError> {
    #[cfg(test)]
    VERIFY_CALLS.with(|calls| calls.set(calls.get() + 1));
    let password = password.to_owned();
    let hash = hash.to_owned();
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AccountError::Hash(e.to_string()))?;
    match outcome {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash unreadable");
            Ok(false)
        }
    }
}

/// Register a new account for `role`.
///
/// # Errors
///
/// [`AccountError::AlreadyExists`] if the `(role, email)` pair is taken,
/// [`AccountError::InvalidEmail`] or [`AccountError::EmptyPassword`] for bad
/// input, and database or hashing failures otherwise.
pub async fn create_account(
    pool: &PgPool,
    role: Role,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<Account, AccountError> {
    let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
    if password.is_empty() {
        return Err(AccountError::EmptyPassword);
    }
    let name = name
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| name_from_email(&email), str::to_owned);
    let password_hash = hash_password(password).await?;

    let row = sqlx::query(
        r"INSERT INTO accounts (role, email, name, password_hash)
          VALUES ($1, $2, $3, $4)
          ON CONFLICT (role, email) DO NOTHING
          RETURNING id",
    )
    .bind(role.slug())
    .bind(&email)
    .bind(&name)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(AccountError::AlreadyExists);
    };

    Ok(Account { id: row.get("id"), role, email, name })
}

/// Check `password` against the stored hash, or against a dummy hash when
/// there is no account. Both paths pay one bcrypt verify.
pub(crate) async fn check_password(password: &str, stored: Option<&str>) -> Result<bool, AccountError> {
    match stored {
        Some(hash) => verify_password(password, hash).await,
        None => {
            let dummy = DUMMY_HASH.get_or_try_init(|| hash_password("college-portal-dummy")).await?;
            verify_password(password, dummy).await?;
            Ok(false)
        }
    }
}

/// Check credentials for `role` and return the matching account.
///
/// Unknown email and wrong password are indistinguishable to the caller, in
/// both response body and timing.
///
/// # Errors
///
/// [`AccountError::InvalidCredentials`] when the email is unknown or the
/// password is wrong; database or hashing failures otherwise.
pub async fn authenticate(pool: &PgPool, role: Role, email: &str, password: &str) -> Result<Account, AccountError> {
    let row = match normalize_email(email) {
        Some(email) => sqlx::query("SELECT id, name, password_hash FROM accounts WHERE role = $1 AND email = $2")
            .bind(role.slug())
            .bind(&email)
            .fetch_optional(pool)
            .await?
            .map(|row| (email, row)),
        None => None,
    };

    let stored: Option<String> = row.as_ref().map(|(_, r)| r.get("password_hash"));
    let matches = check_password(password, stored.as_deref()).await?;

    let Some((email, row)) = row.filter(|_| matches) else {
        return Err(AccountError::InvalidCredentials);
    };

    Ok(Account { id: row.get("id"), role, email, name: row.get("name") })
}
