use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CheckId, SiteId};
use crate::domains::checks::extraction::PageMetadata;

/// SiteCheck - one recorded fetch of a site (table `url_checks`, append-only)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteCheck {
    pub id: CheckId,
    #[sqlx(rename = "url_id")]
    pub site_id: SiteId,
    pub status_code: Option<i32>,
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl SiteCheck {
    /// Append a check row for a site
    pub async fn create(
        site_id: SiteId,
        status_code: Option<i32>,
        metadata: &PageMetadata,
        created_at: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, SiteCheck>(
            r#"
            INSERT INTO url_checks (url_id, status_code, h1, title, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, url_id, status_code, h1, title, description, created_at
            "#,
        )
        .bind(site_id)
        .bind(status_code)
        .bind(metadata.h1.as_deref())
        .bind(metadata.title.as_deref())
        .bind(metadata.description.as_deref())
        .bind(created_at)
        .fetch_one(pool)
        .await
    }

    /// All checks for a site, most recent first
    pub async fn find_for_site(site_id: SiteId, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, SiteCheck>(
            r#"
            SELECT id, url_id, status_code, h1, title, description, created_at
            FROM url_checks
            WHERE url_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(site_id)
        .fetch_all(pool)
        .await
    }
}
