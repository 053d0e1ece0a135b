// Business domains
pub mod checks;
pub mod errors;
pub mod sites;

pub use errors::PageAnalyzerError;
