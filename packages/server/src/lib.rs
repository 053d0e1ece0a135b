// Page Analyzer - API Core
//
// Users submit URLs; each is stored as a canonical site (scheme://host) and
// can be checked on demand: the page is fetched once and its h1, title and
// meta description are recorded.
//
// Domain logic lives in domains/*, infrastructure traits in kernel/, HTTP in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
