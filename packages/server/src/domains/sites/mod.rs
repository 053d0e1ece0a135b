//! Sites domain - submitted URLs reduced to their canonical origin

pub mod actions;
pub mod models;
pub mod normalizer;

pub use actions::{submit_url, Submission};
pub use models::{Site, SiteSummary};
pub use normalizer::{canonicalize, validate, SiteIdentity};
