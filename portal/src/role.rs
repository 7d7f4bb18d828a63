//! Portal roles and their routing conventions.
//!
//! A role decides two paths: the backend login endpoint (`/{slug}/login`)
//! and the post-login home route (`/{slug}`). The login view also carries the
//! role in its `type` query parameter so each role tab is bookmarkable.

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Query parameter on the login route that pre-selects a role tab.
pub const ROLE_QUERY_KEY: &str = "type";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Student,
    Faculty,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Every role in selector order.
    pub const ALL: [Self; 3] = [Self::Student, Self::Faculty, Self::Admin];

    /// Display label, also the value persisted as the session role tag.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
            Self::Admin => "Admin",
        }
    }

    /// Lower-cased path segment.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }

    /// Post-login landing route.
    #[must_use]
    pub fn home_route(self) -> String {
        format!("/{}", self.slug())
    }

    /// Backend login path, relative to the API base.
    #[must_use]
    pub fn login_path(self) -> String {
        format!("/{}/login", self.slug())
    }

    /// Query string reflecting this role on the login route.
    #[must_use]
    pub fn query_string(self) -> String {
        format!("{ROLE_QUERY_KEY}={}", self.slug())
    }

    /// Parse a path segment such as `faculty`. Exact lower-case match only.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.slug() == slug)
    }

    /// Normalize a `type` query value and match it against the role labels.
    ///
    /// The value is lower-cased and its first character capitalized, so
    /// `admin`, `Admin` and `ADMIN` all resolve. Unrecognized values yield
    /// `None` rather than an error.
    #[must_use]
    pub fn from_query(raw: &str) -> Option<Self> {
        let capitalized = capitalize(raw.trim());
        Self::ALL.into_iter().find(|role| role.label() == capitalized)
    }
}

/// Role to select when the login view mounts.
#[must_use]
pub fn initial_role(query: Option<&str>) -> Role {
    query.and_then(Role::from_query).unwrap_or_default()
}

/// Login route with the role tab pre-selected.
#[must_use]
pub fn login_route(role: Role) -> String {
    format!("/login?{}", role.query_string())
}

fn capitalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parse a persisted role tag (`"Admin"`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_query(s).ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
