use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::SiteId;

/// Site - one canonical origin a user asked us to analyze (table `urls`)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub created_at: NaiveDate,
}

/// A site together with the outcome of its most recent check
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteSummary {
    pub id: SiteId,
    pub name: String,
    pub created_at: NaiveDate,
    pub last_check_at: Option<DateTime<Utc>>,
    pub last_status_code: Option<i32>,
}

/// Row returned by the insert-or-fetch in [`Site::create`]
#[derive(sqlx::FromRow)]
struct UpsertedSite {
    #[sqlx(flatten)]
    site: Site,
    inserted: bool,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Site {
    /// Find site by ID
    pub async fn find_by_id(id: SiteId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Site>("SELECT id, name, created_at FROM urls WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find site by its canonical name (exact, case-sensitive match)
    pub async fn find_by_name(name: &str, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Site>("SELECT id, name, created_at FROM urls WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Create a site, or return the existing one if `name` is already taken.
    ///
    /// The unique constraint on `urls.name` decides races between concurrent
    /// submissions; the boolean is true only for the caller whose row was
    /// inserted.
    pub async fn create(
        name: &str,
        created_at: NaiveDate,
        pool: &PgPool,
    ) -> Result<(Self, bool), sqlx::Error> {
        let row = sqlx::query_as::<_, UpsertedSite>(
            r#"
            INSERT INTO urls (name, created_at)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE
            SET name = EXCLUDED.name  -- No-op update to return existing row
            RETURNING id, name, created_at, (xmax = 0) AS inserted
            "#,
        )
        .bind(name)
        .bind(created_at)
        .fetch_one(pool)
        .await?;
        Ok((row.site, row.inserted))
    }

    /// All sites with their latest check, newest site first
    pub async fn find_all_with_last_check(pool: &PgPool) -> Result<Vec<SiteSummary>, sqlx::Error> {
        sqlx::query_as::<_, SiteSummary>(
            r#"
            SELECT
                urls.id,
                urls.name,
                urls.created_at,
                last_check.created_at AS last_check_at,
                last_check.status_code AS last_status_code
            FROM urls
            LEFT JOIN LATERAL (
                SELECT created_at, status_code
                FROM url_checks
                WHERE url_checks.url_id = urls.id
                ORDER BY url_checks.id DESC
                LIMIT 1
            ) AS last_check ON TRUE
            ORDER BY urls.id DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
