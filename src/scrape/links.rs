// src/scrape/links.rs
// =============================================================================
// This module extracts GitHub repository identifiers from an HTML page.
//
// How it works:
// - Fetch the documentation page over HTTP
// - Parse the HTML with the `scraper` crate (CSS selectors over a DOM)
// - Select every <a> whose href starts with https://github.com/
// - Split the link's path into segments: first = owner, second = repo name
//
// Every matching anchor produces one identifier, in document order. We do
// NOT deduplicate - if the page links the same repository twice, it shows
// up twice in the result, and the caller decides what to do about it.
//
// Rust concepts:
// - Result<T, E>: For the fetch step, which can fail
// - Iterators: path_segments() walks the URL path lazily
// - Option chaining: ? inside a -> Option fn bails out early
// =============================================================================

use std::fmt;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::FetchError;

// Anchors have to start with this exact prefix to count as repository links.
// The trailing slash matters: it keeps lookalike hosts out.
const GITHUB_ANCHOR_SELECTOR: &str = r#"a[href^="https://github.com/"]"#;

// Identifies one hosted repository by its owner and name
//
// This is what the extractor emits and what the info fetcher consumes.
// PartialEq/Eq are here so tests can compare whole vectors of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// The account that owns the repository (user or organization)
    pub owner: String,
    /// The repository name
    pub name: String,
}

impl RepoRef {
    /// The repository's public page, e.g. https://github.com/rust-lang/rust
    pub fn page_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

// Display as "owner/name" - used in log messages and API paths
impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// Fetches a documentation page and extracts all repository identifiers
//
// Parameters:
//   client: reqwest HTTP client (built once in main, borrowed here)
//   page_url: the page to scan
//
// Returns: identifiers in document order, duplicates included
//
// A transport failure or a non-2xx status fails the whole call - if we
// can't read the listing page there is nothing to do downstream.
pub async fn scrape_repo_refs(client: &Client, page_url: &str) -> Result<Vec<RepoRef>, FetchError> {
    let html = fetch_page(client, page_url).await?;
    Ok(extract_repo_refs(&html))
}

// Fetches a web page and returns its HTML content
//
// Shared with the dependents scraper in this module. error_for_status()
// turns a non-success response into a reqwest error, which lands in
// FetchError::Transport via the #[from] conversion.
pub(crate) async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let response = response.error_for_status()?;
    Ok(response.text().await?)
}

// Extracts repository identifiers from HTML content
//
// This is the pure half of the extractor so it can be tested offline.
//
// Note: html5ever (underneath scraper) builds a tree out of ANY input, so
// there is no malformed-markup failure mode here. Anchors whose href does
// not parse as a URL, or whose path has fewer than two non-empty segments,
// are simply skipped.
pub fn extract_repo_refs(html: &str) -> Vec<RepoRef> {
    let mut repos = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse(GITHUB_ANCHOR_SELECTOR).unwrap();

    // Walk the matching anchors in document order
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(repo) = repo_ref_from_href(href) {
                repos.push(repo);
            }
        }
    }

    repos
}

// Turns one anchor target into an identifier, if it names a repository
//
// We parse the href as a real URL instead of splitting the raw string, so
// query strings and fragments never leak into the repository name:
//   https://github.com/a/b?tab=readme -> ("a", "b")
//   https://github.com/a/b/tree/main  -> ("a", "b")
//   https://github.com/a              -> None (no repo named)
fn repo_ref_from_href(href: &str) -> Option<RepoRef> {
    let url = Url::parse(href).ok()?;

    // path_segments() splits the path portion only; empty segments show up
    // for trailing or doubled slashes, so filter them out before counting
    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());

    let owner = segments.next()?;
    let name = segments.next()?;

    Some(RepoRef {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a CSS attribute selector?
//    - "a[href^='https://github.com/']" means "all <a> tags whose href
//      STARTS WITH that prefix" (the ^= is the starts-with operator)
//    - The document is filtered once, in document order, exactly like a
//      browser would with querySelectorAll
//
// 2. Why parse the href with the url crate afterwards?
//    - A naive split('/') on the raw string would treat "b?tab=readme" as
//      a repository name
//    - Url::parse separates path from query and fragment for us
//    - path_segments() then gives us just the path pieces
//
// 3. What is Option chaining with ?
//    - Inside a function returning Option, `expr?` bails out with None
//      if expr is None
//    - repo_ref_from_href uses it three times: bad URL, no path, or not
//      enough segments all mean "this anchor names no repository"
//
// 4. Why keep duplicates?
//    - The output order mirrors the page, and the page is the source of
//      truth - deciding that two mentions are "the same" is a policy the
//      caller should own, not the extractor
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(owner: &str, name: &str) -> RepoRef {
        RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_extract_in_document_order() {
        let html = r#"
            <p><a href="https://github.com/rust-lang/rust">Rust</a></p>
            <p><a href="https://github.com/tokio-rs/tokio">Tokio</a></p>
        "#;
        let repos = extract_repo_refs(html);
        assert_eq!(repos, vec![repo("rust-lang", "rust"), repo("tokio-rs", "tokio")]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let html = r#"
            <a href="https://github.com/a/b">first mention</a>
            <a href="https://github.com/a/b">second mention</a>
        "#;
        let repos = extract_repo_refs(html);
        assert_eq!(repos, vec![repo("a", "b"), repo("a", "b")]);
    }

    #[test]
    fn test_skips_links_without_a_repo_name() {
        let html = r#"
            <a href="https://github.com/rust-lang">owner only</a>
            <a href="https://github.com/">host only</a>
            <a href="https://github.com/rust-lang/">trailing slash</a>
        "#;
        assert_eq!(extract_repo_refs(html), vec![]);
    }

    #[test]
    fn test_skips_other_hosts_and_schemes() {
        let html = r#"
            <a href="https://gitlab.com/a/b">GitLab</a>
            <a href="http://github.com/a/b">plain http</a>
            <a href="https://github.community/a/b">lookalike host</a>
            <a href="/local/path">relative</a>
        "#;
        assert_eq!(extract_repo_refs(html), vec![]);
    }

    #[test]
    fn test_query_and_fragment_do_not_leak_into_the_name() {
        let html = r#"
            <a href="https://github.com/a/b?tab=readme-ov-file">query</a>
            <a href="https://github.com/c/d#installation">fragment</a>
        "#;
        let repos = extract_repo_refs(html);
        assert_eq!(repos, vec![repo("a", "b"), repo("c", "d")]);
    }

    #[test]
    fn test_deep_paths_take_the_first_two_segments() {
        let html = r#"<a href="https://github.com/rust-lang/rust/tree/master/src">deep</a>"#;
        let repos = extract_repo_refs(html);
        assert_eq!(repos, vec![repo("rust-lang", "rust")]);
    }

    #[test]
    fn test_display_and_page_url() {
        let r = repo("rust-lang", "rust");
        assert_eq!(r.to_string(), "rust-lang/rust");
        assert_eq!(r.page_url(), "https://github.com/rust-lang/rust");
    }
}
