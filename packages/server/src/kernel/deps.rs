//! Server dependencies for domain actions (using traits for testability)
//!
//! Built once at start-up from [`Config`](crate::config::Config) and handed to
//! every action. Nothing reads configuration from global state.

use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::FetchConfig;
use crate::kernel::{BasePageFetcher, HttpPageFetcher};

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub page_fetcher: Arc<dyn BasePageFetcher>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, page_fetcher: Arc<dyn BasePageFetcher>) -> Self {
        Self {
            db_pool,
            page_fetcher,
        }
    }

    /// Wire the production HTTP fetcher
    pub fn with_http_fetcher(db_pool: PgPool, fetch: &FetchConfig) -> Result<Self> {
        let page_fetcher = Arc::new(HttpPageFetcher::new(fetch)?);
        Ok(Self::new(db_pool, page_fetcher))
    }
}
