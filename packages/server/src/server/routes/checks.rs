//! POST /urls/:id/checks - run a page check and go back to the site page

use axum::{extract::Extension, response::Response};

use crate::domains::checks::{run_check, CheckOutcome};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::SitePath;
use crate::server::routes::sites::redirect_to_site;

pub async fn run_check_handler(
    Extension(state): Extension<AppState>,
    SitePath(site_id): SitePath,
) -> Result<Response, ApiError> {
    let message = match run_check(site_id, &state.deps).await? {
        CheckOutcome::Recorded(_) => "Page successfully checked",
        CheckOutcome::Failed(_) => "Check failed",
    };
    Ok(redirect_to_site(site_id, message))
}
