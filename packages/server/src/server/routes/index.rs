use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    name: &'static str,
    version: &'static str,
    /// Where to submit a URL (form field `url`)
    submit: &'static str,
    sites: &'static str,
    health: &'static str,
}

/// Entry point: names the service and the routes to start from
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        submit: "POST /urls",
        sites: "/urls",
        health: "/health",
    })
}
