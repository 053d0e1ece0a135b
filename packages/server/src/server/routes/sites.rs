//! Site routes.
//!
//! GET  /urls       - all sites with their latest check
//! POST /urls       - submit a URL (form field `url`)
//! GET  /urls/:id   - one site and its check history

use axum::{
    extract::{Extension, Form},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::SiteId;
use crate::domains::checks::{actions as check_actions, SiteCheck};
use crate::domains::sites::{actions as site_actions, Site, SiteSummary};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::SitePath;

#[derive(Deserialize)]
pub struct SubmitUrlForm {
    #[serde(default)]
    pub url: String,
}

/// Body sent along with a redirect to a site page
#[derive(Serialize)]
pub struct RedirectBody {
    pub site_id: SiteId,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct SiteDetailResponse {
    pub site: Site,
    pub checks: Vec<SiteCheck>,
}

/// Location of a site's detail view
pub fn site_location(site_id: SiteId) -> String {
    format!("/urls/{}", site_id)
}

/// 302 to the site page with a short status message
pub fn redirect_to_site(site_id: SiteId, message: &'static str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, site_location(site_id))],
        Json(RedirectBody { site_id, message }),
    )
        .into_response()
}

pub async fn list_sites_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<SiteSummary>>, ApiError> {
    let sites = site_actions::list_sites(&state.deps).await?;
    Ok(Json(sites))
}

pub async fn submit_url_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<SubmitUrlForm>,
) -> Result<Response, ApiError> {
    let submission = site_actions::submit_url(&form.url, &state.deps).await?;

    let message = if submission.created {
        "Page successfully added"
    } else {
        "Page already exists"
    };
    Ok(redirect_to_site(submission.site_id, message))
}

pub async fn get_site_handler(
    Extension(state): Extension<AppState>,
    SitePath(site_id): SitePath,
) -> Result<Json<SiteDetailResponse>, ApiError> {
    let site = site_actions::get_site(site_id, &state.deps).await?;
    let checks = check_actions::list_checks(site.id, &state.deps).await?;
    Ok(Json(SiteDetailResponse { site, checks }))
}
