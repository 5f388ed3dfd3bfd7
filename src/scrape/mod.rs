// src/scrape/mod.rs
// =============================================================================
// This module contains all HTML scraping logic.
//
// Submodules:
// - links: Extracts repository identifiers from a documentation page
// - dependents: Reads the "Used by" counter off a repository's public page
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod dependents;
mod links;

// Re-export public items from submodules
// This lets users write `scrape::scrape_repo_refs()` instead of
// `scrape::links::scrape_repo_refs()`. Only what the rest of the
// application calls is lifted here; the pure extraction halves stay
// behind their file's wrapper.
pub use dependents::fetch_used_by_count;
pub use links::{scrape_repo_refs, RepoRef};
