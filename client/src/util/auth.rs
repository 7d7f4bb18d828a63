//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role home pages apply identical redirect behavior: once the session has
//! loaded, a missing session or one for another role sends the user back to
//! the login view with that role's tab pre-selected.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::Role;
use portal::role::login_route;

use crate::state::auth::AuthState;

/// Where an unauthorized visitor of `role`'s home page should go, if anywhere.
#[must_use]
pub fn unauth_redirect(state: &AuthState, role: Role) -> Option<String> {
    if state.loading {
        return None;
    }
    match &state.session {
        Some(session) if session.role == role => None,
        _ => Some(login_route(role)),
    }
}

/// Redirect away from `role`'s home page whenever [`unauth_redirect`] says so.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, role: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = unauth_redirect(&auth.get(), role) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
