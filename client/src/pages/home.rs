//! Role home pages (`/student`, `/faculty`, `/admin`).
//!
//! The dashboards themselves are plain data screens outside this crate; this
//! page is the authenticated landing spot with a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::Role;
use portal::role::login_route;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::storage::session_store;

fn dashboard_title(role: Role) -> String {
    format!("{} Dashboard", role.label())
}

#[component]
pub fn HomePage(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, role, navigate.clone());
    let navigate = StoredValue::new_local(navigate);

    let on_logout = move |_| {
        let token = auth.get_untracked().session.map(|s| s.token);
        if let Err(_e) = session_store().clear() {
            #[cfg(feature = "hydrate")]
            log::warn!("failed to clear session: {_e}");
        }
        auth.set(AuthState::loaded(None));

        let api_base = config.api_base.clone();
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&api_base, &token).await;
            });
        }
        navigate.with_value(|nav| nav(&login_route(role), NavigateOptions::default()));
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>{dashboard_title(role)}</h1>
                <button class="logout-button" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </header>
        </div>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
