//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use page_analyzer::common::{CheckId, SiteId};
//!
//! let site_id = SiteId::from_i64(1);
//! let check_id = CheckId::from_i64(1);
//!
//! // This would be a compile error:
//! // let wrong: CheckId = site_id;
//! # let _ = (site_id, check_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Site entities (rows of `urls`).
pub struct Site;

/// Marker type for SiteCheck entities (rows of `url_checks`).
pub struct SiteCheck;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Site entities.
pub type SiteId = Id<Site>;

/// Typed ID for SiteCheck entities.
pub type CheckId = Id<SiteCheck>;
