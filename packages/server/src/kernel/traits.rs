// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Deciding what a fetched page means for a check lives in domains/checks.
//
// Naming convention: Base* for trait names (e.g., BasePageFetcher)

use async_trait::async_trait;
use thiserror::Error;

// =============================================================================
// Page Fetcher Trait (Infrastructure - one HTTP round trip)
// =============================================================================

/// Why a fetch did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    /// Any non-2xx response. Redirects land here since they are not followed.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Classified result of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { status_code: u16, body: String },
    Failure { reason: FetchFailure },
}

impl FetchOutcome {
    pub fn failure(reason: FetchFailure) -> Self {
        FetchOutcome::Failure { reason }
    }
}

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Issue exactly one GET against `url` and classify the result.
    ///
    /// Never returns an error: every transport or status problem is folded
    /// into `FetchOutcome::Failure`.
    async fn fetch(&self, url: &str) -> FetchOutcome;
}
