mod common;

use std::time::Duration;

use common::{spawn_test_site, unused_address, PAGE_HTML};
use page_analyzer::config::FetchConfig;
use page_analyzer::kernel::{BasePageFetcher, FetchFailure, FetchOutcome, HttpPageFetcher};

fn fetcher_with_timeout(timeout: Duration) -> HttpPageFetcher {
    HttpPageFetcher::new(&FetchConfig {
        timeout,
        ..FetchConfig::default()
    })
    .expect("Failed to build fetcher")
}

// =============================================================================
// Tests: classification of a single GET
// =============================================================================

#[tokio::test]
async fn test_success_returns_status_and_body() {
    let base = spawn_test_site().await;
    let fetcher = fetcher_with_timeout(Duration::from_secs(5));

    let outcome = fetcher.fetch(&base).await;

    assert_eq!(
        outcome,
        FetchOutcome::Success {
            status_code: 200,
            body: PAGE_HTML.to_string(),
        }
    );
}

#[tokio::test]
async fn test_server_error_is_failure() {
    let base = spawn_test_site().await;
    let fetcher = fetcher_with_timeout(Duration::from_secs(5));

    let outcome = fetcher.fetch(&format!("{}/error", base)).await;

    assert_eq!(outcome, FetchOutcome::failure(FetchFailure::Status(500)));
}

#[tokio::test]
async fn test_client_error_is_failure() {
    let base = spawn_test_site().await;
    let fetcher = fetcher_with_timeout(Duration::from_secs(5));

    let outcome = fetcher.fetch(&format!("{}/missing", base)).await;

    assert_eq!(outcome, FetchOutcome::failure(FetchFailure::Status(404)));
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let base = spawn_test_site().await;
    let fetcher = fetcher_with_timeout(Duration::from_secs(5));

    let outcome = fetcher.fetch(&format!("{}/redirect", base)).await;

    assert_eq!(outcome, FetchOutcome::failure(FetchFailure::Status(301)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let base = spawn_test_site().await;
    let fetcher = fetcher_with_timeout(Duration::from_millis(200));

    let started = std::time::Instant::now();
    let outcome = fetcher.fetch(&format!("{}/slow", base)).await;

    assert_eq!(outcome, FetchOutcome::failure(FetchFailure::Timeout));
    assert!(
        started.elapsed() < common::SLOW_RESPONSE,
        "Fetch should give up before the server answers"
    );
}

#[tokio::test]
async fn test_connection_refused_is_failure() {
    let base = unused_address().await;
    let fetcher = fetcher_with_timeout(Duration::from_secs(5));

    let outcome = fetcher.fetch(&base).await;

    assert!(
        matches!(
            outcome,
            FetchOutcome::Failure {
                reason: FetchFailure::Connect(_)
            }
        ),
        "Expected connect failure, got {:?}",
        outcome
    );
}

// =============================================================================
// Tests: body size cap
// =============================================================================

#[tokio::test]
async fn test_body_is_cut_at_configured_limit() {
    let base = spawn_test_site().await;
    let fetcher = HttpPageFetcher::new(&FetchConfig {
        timeout: Duration::from_secs(5),
        max_body_bytes: 64,
        ..FetchConfig::default()
    })
    .expect("Failed to build fetcher");

    let outcome = fetcher.fetch(&base).await;

    assert_eq!(
        outcome,
        FetchOutcome::Success {
            status_code: 200,
            body: PAGE_HTML[..64].to_string(),
        }
    );
}

#[tokio::test]
async fn test_body_at_limit_is_kept_whole() {
    let base = spawn_test_site().await;
    let fetcher = HttpPageFetcher::new(&FetchConfig {
        timeout: Duration::from_secs(5),
        max_body_bytes: PAGE_HTML.len(),
        ..FetchConfig::default()
    })
    .expect("Failed to build fetcher");

    let outcome = fetcher.fetch(&base).await;

    assert_eq!(
        outcome,
        FetchOutcome::Success {
            status_code: 200,
            body: PAGE_HTML.to_string(),
        }
    );
}
