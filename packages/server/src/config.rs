use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Default timeout for a single page check request.
pub const DEFAULT_CHECK_TIMEOUT_SECS: u64 = 15;

/// Default cap on how much of a page body is read for extraction.
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub fetch: FetchConfig,
}

/// Settings for the outbound page fetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Bytes past this point are dropped before parsing
    pub max_body_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_CHECK_TIMEOUT_SECS),
            user_agent: format!("page-analyzer/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = FetchConfig::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            fetch: FetchConfig {
                timeout: Duration::from_secs(
                    env::var("CHECK_TIMEOUT_SECS")
                        .unwrap_or_else(|_| DEFAULT_CHECK_TIMEOUT_SECS.to_string())
                        .parse()
                        .context("CHECK_TIMEOUT_SECS must be a valid number of seconds")?,
                ),
                user_agent: env::var("CHECK_USER_AGENT").unwrap_or(defaults.user_agent),
                max_body_bytes: env::var("CHECK_MAX_BODY_BYTES")
                    .unwrap_or_else(|_| DEFAULT_MAX_BODY_BYTES.to_string())
                    .parse()
                    .context("CHECK_MAX_BODY_BYTES must be a valid number of bytes")?,
            },
        })
    }
}
