//! Checks domain - fetching a site and recording what its page says

pub mod actions;
pub mod extraction;
pub mod models;

pub use actions::{run_check, CheckOutcome};
pub use extraction::{extract, PageMetadata};
pub use models::SiteCheck;
