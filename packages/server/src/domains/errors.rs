use thiserror::Error;

use crate::common::SiteId;

/// Errors surfaced by site submission and page checks
#[derive(Error, Debug)]
pub enum PageAnalyzerError {
    /// The submitted string is not an acceptable URL. Carries the input as typed.
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Site not found: {0}")]
    SiteNotFound(SiteId),

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, PageAnalyzerError>;
