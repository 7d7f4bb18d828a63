//! Durable client session and its store.
//!
//! ARCHITECTURE
//! ============
//! A [`Session`] is persisted as two string entries (`userToken`,
//! `userType`) in a key/value [`Storage`] backend: browser `localStorage` in
//! `client`, a JSON file in `cli`, [`MemoryStorage`] in tests. Only
//! [`SessionStore`] knows the keys, so screens read and write sessions
//! through `get`/`set`/`clear` and never touch storage directly.
//!
//! Sessions have no client-side expiry. They end on an explicit `clear`
//! (logout) or when the storage is wiped.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::role::Role;

pub const TOKEN_KEY: &str = "userToken";
pub const ROLE_KEY: &str = "userType";

/// An authenticated client: bearer token plus the role it logged in as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: token.into(), role }
    }

    /// Route to land on for this session.
    #[must_use]
    pub fn home_route(&self) -> String {
        self.role.home_route()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key/value backend with `localStorage` semantics.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// In-process storage. Used by tests and by SSR renders, where no durable
/// client storage exists.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Single owner of the session storage keys.
#[derive(Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: Storage> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the persisted session.
    ///
    /// Returns `None` unless a non-empty token and a recognizable role tag
    /// are both present.
    pub fn get(&self) -> Option<Session> {
        let token = self.backend.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let role = self.backend.get_item(ROLE_KEY)?.parse::<Role>().ok()?;
        Some(Session { token, role })
    }

    /// Persist a session, writing token and role together.
    ///
    /// If the role tag cannot be written the previous token is restored (or
    /// removed when there was none), so a failed `set` leaves storage as it
    /// found it.
    ///
    /// # Errors
    ///
    /// Returns the backend error from whichever write failed.
    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        let previous = self.backend.get_item(TOKEN_KEY);
        self.backend.set_item(TOKEN_KEY, &session.token)?;
        if let Err(e) = self.backend.set_item(ROLE_KEY, session.role.label()) {
            let _ = match previous {
                Some(token) => self.backend.set_item(TOKEN_KEY, &token),
                None => self.backend.remove_item(TOKEN_KEY),
            };
            return Err(e);
        }
        Ok(())
    }

    /// Remove both session entries.
    ///
    /// # Errors
    ///
    /// Returns the first backend error; the second key is still attempted.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.backend.remove_item(TOKEN_KEY);
        let role = self.backend.remove_item(ROLE_KEY);
        token.and(role)
    }

    /// `true` when a valid session is present.
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
