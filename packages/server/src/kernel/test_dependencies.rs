// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use super::{BasePageFetcher, FetchFailure, FetchOutcome, ServerDeps};

// =============================================================================
// Mock Page Fetcher
// =============================================================================

/// Replays queued outcomes in order and records every URL it was asked for.
#[derive(Clone, Default)]
pub struct MockPageFetcher {
    outcomes: Arc<Mutex<Vec<FetchOutcome>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given HTML body
    pub fn with_html(self, html: &str) -> Self {
        self.with_outcome(FetchOutcome::Success {
            status_code: 200,
            body: html.to_string(),
        })
    }

    /// Queue a failure
    pub fn with_failure(self, reason: FetchFailure) -> Self {
        self.with_outcome(FetchOutcome::failure(reason))
    }

    /// Queue an arbitrary outcome
    pub fn with_outcome(self, outcome: FetchOutcome) -> Self {
        self.outcomes.lock().unwrap().push(outcome);
        self
    }

    /// Get all URLs that were fetched
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if a URL was fetched
    pub fn was_fetched(&self, url: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|u| u == url)
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        // Record the call
        self.calls.lock().unwrap().push(url.to_string());

        let mut outcomes = self.outcomes.lock().unwrap();
        if !outcomes.is_empty() {
            outcomes.remove(0)
        } else {
            FetchOutcome::Success {
                status_code: 200,
                body: "<html><head><title>Mock Page</title></head><body><h1>Mock</h1></body></html>"
                    .to_string(),
            }
        }
    }
}

// =============================================================================
// TestDependencies builder
// =============================================================================

/// Builds a [`ServerDeps`] with mock services swapped in.
#[derive(Default)]
pub struct TestDependencies {
    page_fetcher: MockPageFetcher,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.page_fetcher = fetcher;
        self
    }

    pub fn into_server_deps(self, db_pool: PgPool) -> ServerDeps {
        ServerDeps::new(db_pool, Arc::new(self.page_fetcher))
    }
}
