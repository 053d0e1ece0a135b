//! Test fixtures for creating test data.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use chrono::Utc;
use page_analyzer::common::SiteId;
use page_analyzer::domains::sites::Site;
use sqlx::PgPool;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A canonical site name no other test in this run will use
pub fn unique_site(label: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("https://{}-{}-{}.example.com", label, nanos, n)
}

/// Insert a site directly through the model
pub async fn create_test_site(pool: &PgPool, name: &str) -> Result<SiteId> {
    let (site, _) = Site::create(name, Utc::now().date_naive(), pool).await?;
    Ok(site.id)
}

/// Number of `urls` rows with this name
pub async fn count_sites_named(pool: &PgPool, name: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Number of `url_checks` rows for a site
pub async fn count_checks(pool: &PgPool, site_id: SiteId) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_checks WHERE url_id = $1")
        .bind(site_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
