// src/github/client.rs
// =============================================================================
// A thin client for the GitHub REST API.
//
// Key functionality:
// - One reqwest::Client built at startup and reused for every call
// - Optional bearer token; without one we run unauthenticated against
//   GitHub's lower rate limit
// - JSON GETs with the API's error body surfaced as FetchError::Api
// - Pagination via the Link response header: a page knows the URL of the
//   next page, or that there is none
//
// The pagination contract is deliberately explicit: GitHub advertises the
// next page as a `rel="next"` entry in the Link header, and the LAST page
// simply has no such entry. We never look at page-count fields in the body.
//
// Rust concepts:
// - Generics + DeserializeOwned: one get_json works for every wire type
// - Borrowing: callers hold the client, methods take &self
// =============================================================================

use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::FetchError;

use super::models::ApiErrorBody;

/// Base URL of the REST API.
pub const API_ROOT: &str = "https://api.github.com";

/// User-Agent for every request this tool makes. GitHub rejects API calls
/// that do not identify themselves.
pub const AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// One page of a listing endpoint
//
// `next` is the ready-to-fetch URL of the following page, taken from the
// Link header; None means this was the last page (or the only one).
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

// The API client: a configured HTTP client plus the optional token
//
// Built once in main and passed by reference into every fetch; there is no
// global client state anywhere in this tool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    token: Option<String>,
}

impl GithubClient {
    /// Builds the client. `token` comes from --token / GITHUB_TOKEN; None
    /// silently downgrades to unauthenticated calls.
    pub fn new(token: Option<String>) -> Result<Self, FetchError> {
        let http = Client::builder().user_agent(AGENT).build()?;
        Ok(Self { http, token })
    }

    // Sends one GET and checks the status
    //
    // Success passes the response through; anything else becomes
    // FetchError::Api carrying GitHub's own error message when the body
    // has one (it almost always does).
    async fn send(&self, url: &str) -> Result<Response, FetchError> {
        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unrecognized status")
                    .to_string(),
            };
            return Err(FetchError::Api {
                endpoint: url.to_string(),
                status,
                message,
            });
        }

        Ok(response)
    }

    /// GETs a URL and deserializes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        Ok(self.send(url).await?.json::<T>().await?)
    }

    /// GETs one page of a listing endpoint, returning the items together
    /// with the next page's URL (if the Link header advertised one).
    pub async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>, FetchError> {
        let response = self.send(url).await?;

        // Read the header before .json() consumes the response
        let next = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_page_url);

        let items = response.json::<Vec<T>>().await?;
        Ok(Page { items, next })
    }
}

// Extracts the rel="next" URL from a Link header value
//
// GitHub's header looks like:
//   <https://api.github.com/repos/a/b/commits?per_page=100&page=2>; rel="next",
//   <https://api.github.com/repos/a/b/commits?per_page=100&page=9>; rel="last"
//
// Entries are comma separated; each entry is a <url> followed by
// ;-separated parameters. Anything malformed is skipped rather than
// treated as an error - a header we can't read means "no next page".
pub fn next_page_url(link_header: &str) -> Option<String> {
    for entry in link_header.split(',') {
        let mut pieces = entry.split(';');

        // First piece is the <url> part
        let target = match pieces.next() {
            Some(piece) => piece.trim(),
            None => continue,
        };
        let url = match target
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(url) => url,
            None => continue,
        };

        // The remaining pieces are parameters like rel="next"
        let is_next = pieces.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if is_next {
            return Some(url.to_string());
        }
    }

    None
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is DeserializeOwned?
//    - A serde trait bound meaning "can be deserialized without borrowing
//      from the input"
//    - We need it because the JSON text is dropped inside .json()
//
// 2. Why does get_page read the header before the body?
//    - response.json() takes the response by value (it consumes it)
//    - Headers have to be copied out first, or they're gone
//
// 3. Why is a malformed Link header not an error?
//    - The header is a continuation signal, nothing more
//    - If GitHub ever sent us garbage there, stopping the pagination is
//      the only sensible reading of it
//
// 4. What does bearer_auth do?
//    - Adds "Authorization: Bearer <token>" to the request
//    - Only the API client does this; page scrapes go through the plain
//      client so the token never leaves api.github.com
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_from_a_real_header() {
        let header = r#"<https://api.github.com/repos/a/b/commits?per_page=100&page=2>; rel="next", <https://api.github.com/repos/a/b/commits?per_page=100&page=9>; rel="last""#;
        assert_eq!(
            next_page_url(header).as_deref(),
            Some("https://api.github.com/repos/a/b/commits?per_page=100&page=2")
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let header = r#"<https://api.github.com/repos/a/b/commits?per_page=100&page=8>; rel="prev", <https://api.github.com/repos/a/b/commits?per_page=100&page=1>; rel="first""#;
        assert_eq!(next_page_url(header), None);
    }

    #[test]
    fn test_next_does_not_have_to_be_first() {
        let header = r#"<https://x.test/?page=1>; rel="first", <https://x.test/?page=3>; rel="next""#;
        assert_eq!(next_page_url(header).as_deref(), Some("https://x.test/?page=3"));
    }

    #[test]
    fn test_unquoted_rel_is_accepted() {
        let header = "<https://x.test/?page=2>; rel=next";
        assert_eq!(next_page_url(header).as_deref(), Some("https://x.test/?page=2"));
    }

    #[test]
    fn test_garbage_means_no_next_page() {
        assert_eq!(next_page_url(""), None);
        assert_eq!(next_page_url("not a link header"), None);
        assert_eq!(next_page_url("rel=\"next\""), None);
        assert_eq!(next_page_url("<unterminated; rel=\"next\""), None);
    }
}
