//! Unit tests for search URL resolution.
//!
//! These tests exercise prefix + query composition, percent-encoding of the
//! raw query, fallback substitution on malformed input, and purity.

use rstest::rstest;
use scout::services::search_resolver::{SearchResolver, SearchResolverTrait, FALLBACK_URL};
use scout::types::engine::SearchEngine;

#[rstest]
#[case(SearchEngine::Google, "https://google.com/search?q=rust")]
#[case(SearchEngine::Bing, "https://bing.com/search?q=rust")]
#[case(SearchEngine::Yahoo, "https://search.yahoo.com/search?p=rust")]
#[case(SearchEngine::DuckDuckGo, "https://duckduckgo.com/?q=rust")]
#[case(SearchEngine::Ecosia, "https://www.ecosia.org/search?q=rust")]
fn test_builtin_prefixes_resolve(#[case] engine: SearchEngine, #[case] expected: &str) {
    let resolver = SearchResolver::new();
    let prefix = engine.prefix().expect("built-in engine has a prefix");

    let url = resolver.resolve(prefix, "rust").unwrap();
    assert_eq!(url.as_str(), expected);
}

#[test]
fn test_spaces_are_percent_encoded() {
    let resolver = SearchResolver::new();

    let url = resolver.resolve("https://x.com/?q=", "hello world").unwrap();
    assert_eq!(url.as_str(), "https://x.com/?q=hello%20world");
}

#[test]
fn test_reserved_characters_are_percent_encoded() {
    let resolver = SearchResolver::new();

    let url = resolver
        .resolve("https://google.com/search?q=", "a&b=c?d")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://google.com/search?q=a%26b%3Dc%3Fd"
    );
}

#[test]
fn test_unicode_query_resolves() {
    let resolver = SearchResolver::new();

    let url = resolver.resolve("https://duckduckgo.com/?q=", "東京").unwrap();
    assert_eq!(url.as_str(), "https://duckduckgo.com/?q=%E6%9D%B1%E4%BA%AC");
}

#[test]
fn test_malformed_prefix_is_an_error() {
    let resolver = SearchResolver::new();

    let result = resolver.resolve("not a url at all", "query");
    assert!(result.is_err());
}

#[test]
fn test_resolve_or_fallback_substitutes_fallback() {
    let resolver = SearchResolver::new();

    let url = resolver.resolve_or_fallback("not a url at all", "query");
    assert_eq!(url.as_str(), resolver.fallback().as_str());
    assert_eq!(url, url::Url::parse(FALLBACK_URL).unwrap());
}

#[test]
fn test_resolve_or_fallback_passes_through_valid_urls() {
    let resolver = SearchResolver::new();

    let url = resolver.resolve_or_fallback("https://google.com/search?q=", "cats");
    assert_eq!(url.as_str(), "https://google.com/search?q=cats");
}

/// Resolution is pure: identical inputs always yield identical output.
#[test]
fn test_resolution_is_deterministic() {
    let resolver = SearchResolver::new();

    let a = resolver.resolve("https://bing.com/search?q=", "repeat me").unwrap();
    let b = resolver.resolve("https://bing.com/search?q=", "repeat me").unwrap();
    assert_eq!(a, b);
}
