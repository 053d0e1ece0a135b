//! HTTP page fetcher used by page checks.
//!
//! One GET per call, bounded by the configured timeout. Redirects are not
//! followed: a 3xx comes back as its own status and is classified as a
//! failure like any other non-2xx response. At most `max_body_bytes` of the
//! body are read; the rest of a larger page is never downloaded.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::{BasePageFetcher, FetchFailure, FetchOutcome};
use crate::config::FetchConfig;

/// reqwest-backed implementation of [`BasePageFetcher`]
pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl HttpPageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Read the body chunk by chunk, stopping at `max_body_bytes`.
    ///
    /// Returns the body decoded as UTF-8 (lossy, since a cut can land inside
    /// a character) and whether it was cut short.
    async fn read_body(
        &self,
        mut response: reqwest::Response,
    ) -> Result<(String, bool), reqwest::Error> {
        let mut buf: Vec<u8> = Vec::new();
        let mut truncated = false;

        while let Some(chunk) = response.chunk().await? {
            let room = self.max_body_bytes - buf.len();
            if chunk.len() > room {
                buf.extend_from_slice(&chunk[..room]);
                truncated = true;
                break;
            }
            buf.extend_from_slice(&chunk);
        }

        Ok((String::from_utf8_lossy(&buf).into_owned(), truncated))
    }

    /// Map a transport error onto the failure taxonomy
    fn classify_error(error: &reqwest::Error) -> FetchFailure {
        if error.is_timeout() {
            FetchFailure::Timeout
        } else if error.is_connect() {
            FetchFailure::Connect(error.to_string())
        } else if error.is_body() || error.is_decode() {
            FetchFailure::Body(error.to_string())
        } else {
            FetchFailure::Request(error.to_string())
        }
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        debug!(url = %url, "Fetching page");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = Self::classify_error(&e);
                warn!(url = %url, error = %reason, "Page fetch failed");
                return FetchOutcome::failure(reason);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Page returned non-success status");
            return FetchOutcome::failure(FetchFailure::Status(status.as_u16()));
        }

        match self.read_body(response).await {
            Ok((body, truncated)) => {
                if truncated {
                    warn!(url = %url, limit = self.max_body_bytes, "Page body truncated");
                }
                debug!(url = %url, status = status.as_u16(), bytes = body.len(), "Page fetched");
                FetchOutcome::Success {
                    status_code: status.as_u16(),
                    body,
                }
            }
            Err(e) => {
                // The timeout also covers the body, so a slow body is still a Timeout
                let reason = Self::classify_error(&e);
                warn!(url = %url, error = %reason, "Failed to read page body");
                FetchOutcome::failure(reason)
            }
        }
    }
}
