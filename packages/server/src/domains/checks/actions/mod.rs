//! Check domain actions - the page-check pipeline
//!
//! fetch → extract → record. Only a 200 response is recorded; every other
//! outcome is reported to the caller and leaves the history untouched.

use chrono::Utc;
use tracing::{info, warn};

use crate::common::SiteId;
use crate::domains::checks::extraction;
use crate::domains::checks::models::SiteCheck;
use crate::domains::errors::{PageAnalyzerError, Result};
use crate::domains::sites::models::Site;
use crate::kernel::{FetchFailure, FetchOutcome, ServerDeps};

/// What happened when a check ran against an existing site
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// The page answered 200 and a check row was appended
    Recorded(SiteCheck),
    /// The fetch failed or answered something other than 200; nothing was written
    Failed(FetchFailure),
}

impl CheckOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, CheckOutcome::Recorded(_))
    }
}

/// Fetch a site's page, extract its metadata and record the check
pub async fn run_check(site_id: SiteId, deps: &ServerDeps) -> Result<CheckOutcome> {
    let site = Site::find_by_id(site_id, &deps.db_pool)
        .await?
        .ok_or(PageAnalyzerError::SiteNotFound(site_id))?;

    info!(site_id = %site.id, url = %site.name, "Running page check");

    let (status_code, body) = match deps.page_fetcher.fetch(&site.name).await {
        FetchOutcome::Success { status_code, body } => (status_code, body),
        FetchOutcome::Failure { reason } => {
            warn!(site_id = %site.id, error = %reason, "Page check failed");
            return Ok(CheckOutcome::Failed(reason));
        }
    };

    if status_code != 200 {
        warn!(site_id = %site.id, status_code, "Page check got non-200 response, not recording");
        return Ok(CheckOutcome::Failed(FetchFailure::Status(status_code)));
    }

    let metadata = extraction::extract(&body);
    let check = SiteCheck::create(
        site.id,
        Some(i32::from(status_code)),
        &metadata,
        Utc::now(),
        &deps.db_pool,
    )
    .await?;

    info!(site_id = %site.id, check_id = %check.id, "Page check recorded");

    Ok(CheckOutcome::Recorded(check))
}

/// Check history of a site, most recent first
pub async fn list_checks(site_id: SiteId, deps: &ServerDeps) -> Result<Vec<SiteCheck>> {
    Ok(SiteCheck::find_for_site(site_id, &deps.db_pool).await?)
}
