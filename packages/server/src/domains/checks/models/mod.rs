pub mod site_check;

pub use site_check::SiteCheck;
