// src/scrape/dependents.rs
// =============================================================================
// This module reads the "Used by" counter from a repository's public page.
//
// GitHub shows how many repositories depend on a project as a small counter
// badge next to the "Used by" link (the one pointing at
// .../network/dependents). That number is not exposed by the REST API, so
// we scrape it.
//
// The counter is best-effort by contract: the caller treats any failure
// here as "unknown", logs it, and records zero. Only this module's parsing
// decides what counts as a failure.
//
// Rust concepts:
// - Result<T, E>: Parse problems are errors; a missing counter is NOT
// - String cleanup: replace/trim before parsing digits
// =============================================================================

use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::FetchError;

use super::links::fetch_page;

// The counter badge inside the anchor that links to the dependents page
const COUNTER_SELECTOR: &str = r#"a[href$="/network/dependents"] span.Counter"#;

// Fetches a repository page and parses its "Used by" counter
//
// Parameters:
//   client: the plain web client (no GitHub API auth on this request)
//   repo_page_url: https://github.com/{owner}/{name}
//
// Returns: the dependents count, or an error the caller is expected to
// absorb (transport failure, or counter text that is not a plain number)
pub async fn fetch_used_by_count(client: &Client, repo_page_url: &str) -> Result<u64, FetchError> {
    let html = fetch_page(client, repo_page_url).await?;
    parse_used_by(&html)
}

// Parses the "Used by" counter out of a repository page's HTML
//
// Rules, in order:
// - no counter element on the page -> Ok(0), the repo just has no
//   dependents box (packages without a manifest GitHub understands)
// - counter text empty after cleanup -> Ok(0)
// - counter text with thousands separators ("1,234") -> Ok(1234)
// - anything else ("21.3k" and friends) -> Parse error
pub fn parse_used_by(html: &str) -> Result<u64, FetchError> {
    let document = Html::parse_document(html);

    // Constant selector, same .unwrap() rationale as in links.rs
    let selector = Selector::parse(COUNTER_SELECTOR).unwrap();

    // Take the first matching counter; the page has at most one
    let counter = match document.select(&selector).next() {
        Some(element) => element,
        None => return Ok(0),
    };

    // An element's text can be split across several nodes, so collect it
    let text: String = counter.text().collect();

    // Strip thousands separators first, then surrounding whitespace
    let cleaned = text.replace(',', "");
    let digits = cleaned.trim();

    if digits.is_empty() {
        return Ok(0);
    }

    digits.parse::<u64>().map_err(|e| FetchError::Parse {
        what: "used-by counter",
        detail: format!("{:?}: {}", text.trim(), e),
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is a missing element Ok(0) but bad text an Err?
//    - No counter means GitHub has nothing to report - that IS the answer
//    - Text we can't read means we don't know the answer, and pretending
//      we do would be wrong; the caller gets to choose the fallback
//
// 2. What does counter.text() return?
//    - An iterator over the text nodes inside the element
//    - .collect::<String>() concatenates them into one owned String
//
// 3. Why u64 and not i64?
//    - A dependents count can't be negative, and the rest of the record
//      uses unsigned counters too
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        let html = r#"
            <a href="/rust-lang/rust/network/dependents">
                Used by <span class="Counter">42</span>
            </a>
        "#;
        assert_eq!(parse_used_by(html).unwrap(), 42);
    }

    #[test]
    fn test_thousands_separators_are_stripped() {
        let html = r#"
            <a href="/serde-rs/serde/network/dependents">
                Used by <span class="Counter">1,234,567</span>
            </a>
        "#;
        assert_eq!(parse_used_by(html).unwrap(), 1_234_567);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let html = r#"
            <a href="/a/b/network/dependents"><span class="Counter">
                7
            </span></a>
        "#;
        assert_eq!(parse_used_by(html).unwrap(), 7);
    }

    #[test]
    fn test_missing_counter_means_zero() {
        let html = r#"<div><a href="/a/b/stargazers">Stars</a></div>"#;
        assert_eq!(parse_used_by(html).unwrap(), 0);
    }

    #[test]
    fn test_empty_counter_means_zero() {
        let html = r#"<a href="/a/b/network/dependents"><span class="Counter"></span></a>"#;
        assert_eq!(parse_used_by(html).unwrap(), 0);
    }

    #[test]
    fn test_abbreviated_counts_are_a_parse_error() {
        let html = r#"<a href="/a/b/network/dependents"><span class="Counter">21.3k</span></a>"#;
        let err = parse_used_by(html).unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn test_first_counter_wins() {
        let html = r#"
            <a href="/a/b/network/dependents"><span class="Counter">12</span></a>
            <a href="/a/b/network/dependents"><span class="Counter">99</span></a>
        "#;
        assert_eq!(parse_used_by(html).unwrap(), 12);
    }

    #[test]
    fn test_counter_on_an_unrelated_anchor_is_ignored() {
        let html = r#"<a href="/a/b/stargazers"><span class="Counter">500</span></a>"#;
        assert_eq!(parse_used_by(html).unwrap(), 0);
    }
}
