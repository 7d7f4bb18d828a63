//! Login page: role tabs, credential form, and the session bootstrap guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the form signals and hands submissions to the shared
//! `portal::LoginController`. With a session already stored it redirects to
//! that role's home route before the form is ever shown.
//!
//! CONCURRENCY
//! ===========
//! The submit button is disabled while a request is in flight and repeated
//! submits are ignored. A response that lands after the page unmounted is
//! dropped: signals are written with `try_set` and no navigation happens.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use portal::role::{ROLE_QUERY_KEY, initial_role, login_route};
use portal::{Credentials, LoginConfig, Role};

use crate::components::credential_form::CredentialForm;
use crate::components::notice_banner::NoticeBanner;
use crate::components::role_selector::RoleSelector;
use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
use crate::state::notice::Notice;

fn page_title(role: Role) -> String {
    format!("{} Login", role.label())
}

fn bypass_banner(config: LoginConfig, role: Role) -> &'static str {
    if config.bypasses(role) {
        "Dev bypass enabled: admin auth skipped"
    } else {
        "Make sure you have the correct credentials."
    }
}

fn query_role(raw: Option<&str>) -> Option<Role> {
    raw.and_then(Role::from_query)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = StoredValue::new_local(use_navigate());
    let query = use_query_map();

    let selected = RwSignal::new(initial_role(query.with_untracked(|q| q.get(ROLE_QUERY_KEY)).as_deref()));
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let checked = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();

    // Adopt a recognized `type` query value; anything else keeps the current tab.
    Effect::new(move || {
        if let Some(role) = query_role(query.with(|q| q.get(ROLE_QUERY_KEY)).as_deref()) {
            selected.set(role);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        Effect::new(move || match crate::net::api::login_controller(&config).bootstrap_redirect() {
            Some(route) => {
                log::info!("session present, redirecting to {route}");
                navigate.with_value(|nav| nav(&route, NavigateOptions { replace: true, ..NavigateOptions::default() }));
            }
            None => checked.set(true),
        });
    }

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let select_role = move |role: Role| {
        selected.set(role);
        navigate.with_value(|nav| nav(&login_route(role), NavigateOptions::default()));
    };

    let login_config = config.login;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        notice.set(None);
        let role = selected.get_untracked();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login_controller(&config)
                    .submit(role, &credentials)
                    .await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(ok) => {
                        log::info!("login succeeded for {role}");
                        notice.try_set(Some(Notice::from(&ok)));
                        auth.try_set(AuthState::loaded(Some(ok.session.clone())));
                        navigate.with_value(|nav| nav(&ok.redirect, NavigateOptions::default()));
                    }
                    Err(err) => {
                        log::warn!("login failed for {role}: {err}");
                        notice.try_set(Some(Notice::from(&err)));
                    }
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (role, credentials, &config);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <Show when=move || checked.get()>
                <div class="login-card">
                    <h1>{move || page_title(selected.get())}</h1>
                    <RoleSelector selected=selected on_select=select_role/>
                    <CredentialForm
                        role=selected
                        email=email
                        password=password
                        busy=busy
                        on_submit=on_submit.clone()
                    />
                    <NoticeBanner notice=notice/>
                    <p class="login-hint">{move || bypass_banner(login_config, selected.get())}</p>
                </div>
            </Show>
        </div>
    }
}
