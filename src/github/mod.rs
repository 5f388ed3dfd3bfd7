// src/github/mod.rs
// =============================================================================
// This module is the whole GitHub REST surface of the program.
//
// Layout:
// - client.rs: the authenticated HTTP client and Link-header pagination
// - models.rs: the handful of response fields we deserialize
// - fetch.rs:  the per-repository sequence that builds a RepoInfo, and
//              the skip-on-failure loop over the whole list
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod client;
mod fetch;
mod models;

// Re-export the pieces the rest of the program touches
pub use client::{GithubClient, AGENT};
pub use fetch::{collect_repo_infos, fetch_repo_info, RepoInfo};
