//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use portal::Role;

use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config and auth state, loads any stored session once
/// hydrated, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(ClientConfig::from_build_env());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let session = crate::util::storage::session_store().get();
        auth.set(AuthState::loaded(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/college-portal.css"/>
        <Title text="College Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("student") view=|| view! { <HomePage role=Role::Student/> }/>
                <Route path=StaticSegment("faculty") view=|| view! { <HomePage role=Role::Faculty/> }/>
                <Route path=StaticSegment("admin") view=|| view! { <HomePage role=Role::Admin/> }/>
            </Routes>
        </Router>
    }
}
