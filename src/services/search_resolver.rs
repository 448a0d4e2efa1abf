//! Search URL resolution for Scout.
//!
//! Maps an engine prefix plus raw query text to a destination URL. The raw
//! query is percent-encoded per URL query-component rules before it is
//! appended to the prefix. Resolution is pure: identical inputs always yield
//! identical output, and nothing is mutated.
//!
//! Callers guard empty queries before calling in; an empty search box
//! triggers neither resolution nor history recording.

use url::Url;

use crate::types::errors::ResolveError;

/// Neutral page loaded when a prefix + query does not form a valid URL.
/// Resolution failures are recovered here, never surfaced as errors.
pub const FALLBACK_URL: &str = "https://example.com";

/// Trait defining search URL resolution.
pub trait SearchResolverTrait {
    fn resolve(&self, prefix: &str, query: &str) -> Result<Url, ResolveError>;
    fn resolve_or_fallback(&self, prefix: &str, query: &str) -> Url;
    fn fallback(&self) -> &Url;
}

/// Search URL resolver with a fixed fallback page.
pub struct SearchResolver {
    fallback: Url,
}

impl SearchResolver {
    pub fn new() -> Self {
        Self {
            fallback: Url::parse(FALLBACK_URL).expect("fallback URL is a valid absolute URL"),
        }
    }
}

impl Default for SearchResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchResolverTrait for SearchResolver {
    /// Percent-encodes `query` and appends it to `prefix`.
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidUrl` when the combination does not parse
    /// as an absolute URL.
    fn resolve(&self, prefix: &str, query: &str) -> Result<Url, ResolveError> {
        let candidate = format!("{}{}", prefix, urlencoding::encode(query));
        Url::parse(&candidate)
            .map_err(|e| ResolveError::InvalidUrl(format!("{}: {}", candidate, e)))
    }

    /// Like [`resolve`](SearchResolverTrait::resolve), but substitutes the
    /// fallback page on failure instead of returning an error.
    fn resolve_or_fallback(&self, prefix: &str, query: &str) -> Url {
        self.resolve(prefix, query)
            .unwrap_or_else(|_| self.fallback.clone())
    }

    /// The fixed fallback page.
    fn fallback(&self) -> &Url {
        &self.fallback
    }
}
