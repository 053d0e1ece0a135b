//! Submitted URL validation and canonical site identity.
//!
//! A site is identified by `scheme://host[:port]` taken from what the user
//! typed. The host keeps its original case, so `https://Example.com` and
//! `https://example.com` are distinct sites.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Longest submission accepted, counted in characters.
pub const MAX_URL_LENGTH: usize = 255;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Canonical `scheme://host` key of a site
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteIdentity(String);

impl SiteIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a submission, returning `None` unless it is a fetchable absolute URL
fn parse(raw: &str) -> Option<Url> {
    let input = raw.trim();
    if input.is_empty() || input.chars().count() > MAX_URL_LENGTH {
        return None;
    }
    // The parser silently drops tabs and newlines, which would desync the raw slice
    if input.chars().any(char::is_control) {
        return None;
    }

    let parsed = Url::parse(input).ok()?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return None;
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Some(parsed),
        _ => None,
    }
}

/// Returns true when `raw` can be stored as a site.
///
/// Rejects empty input, anything over [`MAX_URL_LENGTH`] characters, and
/// anything that is not an absolute `http`/`https` URL with a host. The
/// canonical form must also fit in [`MAX_URL_LENGTH`]: `http:host` is
/// accepted by the parser but grows by two characters once rewritten.
pub fn validate(raw: &str) -> bool {
    canonicalize(raw).is_some()
}

/// Derive the canonical identity of a submission.
///
/// The scheme comes from the parser (always lowercase). The authority is
/// sliced from the raw input so the host keeps its case; userinfo is dropped,
/// an explicit port is kept. Returns `None` for input `validate` rejects,
/// including input whose canonical form would exceed [`MAX_URL_LENGTH`].
pub fn canonicalize(raw: &str) -> Option<SiteIdentity> {
    let parsed = parse(raw)?;
    let input = raw.trim();

    // Skip "<scheme>:" then any slashes; the parser accepts both "/" and "\"
    let after_scheme = &input[parsed.scheme().len() + 1..];
    let rest = after_scheme.trim_start_matches(['/', '\\']);

    let authority_end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host_and_port = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };

    let identity = format!("{}://{}", parsed.scheme(), host_and_port);
    if identity.chars().count() > MAX_URL_LENGTH {
        return None;
    }
    Some(SiteIdentity(identity))
}
