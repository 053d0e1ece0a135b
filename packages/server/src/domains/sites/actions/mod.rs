//! Site domain actions - business logic functions
//!
//! Route handlers call these with the shared [`ServerDeps`]; all SQL stays in
//! the models.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::common::SiteId;
use crate::domains::errors::{PageAnalyzerError, Result};
use crate::domains::sites::models::{Site, SiteSummary};
use crate::domains::sites::normalizer;
use crate::kernel::ServerDeps;

/// Result of a URL submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub site_id: SiteId,
    /// False when the site already existed. Not an error.
    pub created: bool,
}

/// Validate a submitted URL and find or create its site
pub async fn submit_url(raw: &str, deps: &ServerDeps) -> Result<Submission> {
    let identity = normalizer::canonicalize(raw).ok_or_else(|| {
        info!(url = %raw, "Rejected invalid URL submission");
        PageAnalyzerError::InvalidUrl {
            url: raw.to_string(),
        }
    })?;

    if let Some(existing) = Site::find_by_name(identity.as_str(), &deps.db_pool).await? {
        info!(site_id = %existing.id, name = %existing.name, "Site already exists");
        return Ok(Submission {
            site_id: existing.id,
            created: false,
        });
    }

    let today = Utc::now().date_naive();
    let (site, created) = Site::create(identity.as_str(), today, &deps.db_pool).await?;

    if created {
        info!(site_id = %site.id, name = %site.name, "Site created");
    } else {
        // Another request inserted the same identity between our lookup and insert
        info!(site_id = %site.id, name = %site.name, "Site created concurrently, reusing it");
    }

    Ok(Submission {
        site_id: site.id,
        created,
    })
}

/// Get a single site
pub async fn get_site(site_id: SiteId, deps: &ServerDeps) -> Result<Site> {
    Site::find_by_id(site_id, &deps.db_pool)
        .await?
        .ok_or(PageAnalyzerError::SiteNotFound(site_id))
}

/// List all sites with their latest check, newest first
pub async fn list_sites(deps: &ServerDeps) -> Result<Vec<SiteSummary>> {
    Ok(Site::find_all_with_last_check(&deps.db_pool).await?)
}
