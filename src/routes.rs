//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered portal at `/`, the hydrate
//! bundle under `/pkg`, and a health check. The host keeps no portal state;
//! sessions, drafts, and records all live in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Health and legacy-path routes that need no Leptos state.
fn service_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/login", get(redirect_login_to_root))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// The login screen is the root view whenever no session exists.
async fn redirect_login_to_root() -> Redirect {
    Redirect::temporary("/")
}

/// Full host router: service routes + Leptos SSR + static bundle.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(hostel_client::app::App);
    let pkg_dir = PathBuf::from(&*leptos_options.site_root).join(&*leptos_options.site_pkg_dir);
    tracing::debug!(routes = routes.len(), pkg_dir = %pkg_dir.display(), "assembling router");

    service_routes()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || hostel_client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}
