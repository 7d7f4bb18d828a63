//! Transient user-facing notifications for the login flow.

#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;

use portal::{LoginError, LoginSuccess};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    /// CSS modifier class for the banner.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

impl From<&LoginSuccess> for Notice {
    fn from(ok: &LoginSuccess) -> Self {
        Self::success(ok.notice)
    }
}

impl From<&LoginError> for Notice {
    fn from(err: &LoginError) -> Self {
        Self::error(err.to_string())
    }
}
