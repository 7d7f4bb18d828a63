//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the app root. The session is
//! read from durable storage once after hydration; until then `loading` is
//! set and route guards hold off.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use portal::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// State after reading storage.
    #[must_use]
    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }
}
