pub mod site;

pub use site::{Site, SiteSummary};
