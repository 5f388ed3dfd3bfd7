// src/error.rs
// =============================================================================
// This file defines the error type shared by the scraping and GitHub modules.
//
// There are exactly three kinds of failure in this tool:
// - Transport: the network call itself failed, or a plain page fetch came
//   back with a non-success status
// - Parse: some text we scraped did not have the shape we expected
// - Api: the GitHub API answered, but with an error payload
//
// The binary (main.rs) wraps these in anyhow for user-facing context;
// everything below main returns this concrete type so callers can tell the
// kinds apart.
//
// Rust concepts:
// - thiserror: Derive macro that implements std::error::Error + Display
// - #[from]: Automatic conversion, so `?` works on reqwest results directly
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// A request never completed, or a scraped page returned a non-2xx
    /// status (mapped here through reqwest's `error_for_status`).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Text that should have had a specific shape did not parse.
    /// `what` names the thing we were reading, `detail` says what we saw.
    #[error("could not parse {what}: {detail}")]
    Parse { what: &'static str, detail: String },

    /// The GitHub API returned an error response for a call.
    /// `message` carries the `message` field of GitHub's JSON error body
    /// when one could be read.
    #[error("GitHub API error on {endpoint}: {status}: {message}")]
    Api {
        endpoint: String,
        status: StatusCode,
        message: String,
    },
}
