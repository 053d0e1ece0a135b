//! Request extractors shared by the site routes.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::common::SiteId;
use crate::server::error::not_found;

/// `:id` path segment parsed as a [`SiteId`].
///
/// Anything that is not an integer id cannot name a site, so it is rejected
/// with the same JSON 404 as an unknown id.
pub struct SitePath(pub SiteId);

#[async_trait]
impl<S> FromRequestParts<S> for SitePath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        raw.parse::<SiteId>()
            .map(SitePath)
            .map_err(|_| not_found(&raw))
    }
}
