//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the auth REST endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Without a Leptos site
//! configuration the server still runs API-only via [`app`].

pub mod auth;
pub mod error;

pub use error::ApiError;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// CORS restricted to the configured frontend origin. An origin that is not a
/// valid header value falls back to allowing any origin.
pub(crate) fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match HeaderValue::from_str(origin) {
        Ok(value) => cors.allow_origin(value),
        Err(e) => {
            tracing::warn!(origin, error = %e, "invalid FRONTEND_API_LINK; allowing any origin");
            cors.allow_origin(Any)
        }
    }
}

/// Auth REST routes shared by the SSR app and the CLI.
fn api_routes(state: AppState) -> Router {
    let cors = cors_layer(&state.config.frontend_origin);

    Router::new()
        .route("/api/{role}/login", post(auth::login))
        .route("/api/{role}/register", post(auth::register))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API-only router: REST endpoints plus a plain-text root.
pub fn app(state: AppState) -> Router {
    api_routes(state).route("/", get(root))
}

/// Leptos SSR frontend: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn root() -> &'static str {
    "College portal server is up"
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
