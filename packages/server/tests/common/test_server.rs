//! Throw-away local HTTP server for exercising the real page fetcher.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

pub const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>  Local Test Page </title>
    <meta name="description" content="  hello  ">
  </head>
  <body><h1>Welcome</h1></body>
</html>"#;

/// How long `/slow` waits before answering
pub const SLOW_RESPONSE: Duration = Duration::from_secs(3);

async fn page() -> Html<&'static str> {
    Html(PAGE_HTML)
}

async fn server_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "missing")
}

async fn redirect() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")], "")
}

async fn slow() -> Html<&'static str> {
    tokio::time::sleep(SLOW_RESPONSE).await;
    Html(PAGE_HTML)
}

/// Start the server on an ephemeral port and return its base URL
pub async fn spawn_test_site() -> String {
    let app = Router::new()
        .route("/", get(page))
        .route("/error", get(server_error))
        .route("/missing", get(not_found))
        .route("/redirect", get(redirect))
        .route("/slow", get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr: SocketAddr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}

/// A base URL nothing is listening on
pub async fn unused_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}
