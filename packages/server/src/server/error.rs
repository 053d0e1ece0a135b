//! Mapping of domain errors onto HTTP responses.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::PageAnalyzerError;

/// JSON 404 for a site id that does not resolve
pub fn not_found(site_id: impl fmt::Display) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Site {} not found", site_id) })),
    )
        .into_response()
}

/// Error type returned by route handlers
#[derive(Debug)]
pub struct ApiError(pub PageAnalyzerError);

impl From<PageAnalyzerError> for ApiError {
    fn from(error: PageAnalyzerError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PageAnalyzerError::InvalidUrl { url } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "Invalid URL", "url": url })),
            )
                .into_response(),
            PageAnalyzerError::SiteNotFound(site_id) => not_found(site_id),
            PageAnalyzerError::Storage(e) => {
                tracing::error!(error = %e, "Storage error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
