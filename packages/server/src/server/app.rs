//! Application setup and router configuration.

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    get_site_handler, health_handler, index_handler, list_sites_handler, run_check_handler,
    submit_url_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState { deps };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/urls", get(list_sites_handler).post(submit_url_handler))
        .route("/urls/:id", get(get_site_handler))
        .route("/urls/:id/checks", post(run_check_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
