// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The interface is deliberately small: one optional positional argument
// for the listing page, a token for the GitHub API, and an output switch.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// The listing page scanned when no URL is given on the command line
pub const DEFAULT_PAGE_URL: &str = "https://core.telegram.org/bots/samples";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-scout",
    version = "0.1.0",
    about = "Collects GitHub repository statistics from links on a web page",
    long_about = "repo-scout scans a web page for GitHub repository links, gathers \
                  stars, forks, watchers, commit history and more for each one, and \
                  prints the result as a Markdown table."
)]
pub struct Cli {
    /// Page to scan for GitHub repository links
    ///
    /// This is a positional argument; when omitted, the Telegram bot
    /// samples page is scanned
    #[arg(default_value = DEFAULT_PAGE_URL)]
    pub page_url: String,

    /// GitHub API token for authenticated requests
    ///
    /// Unauthenticated requests hit GitHub's low rate limit quickly, so a
    /// token is strongly recommended for more than a handful of repos.
    /// Read from the GITHUB_TOKEN environment variable when the flag is
    /// not given.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output results in JSON format instead of a Markdown table
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 2. What does `env = "GITHUB_TOKEN"` do?
//    - clap reads the variable when the flag is absent, so the token can
//      live in the environment instead of shell history
//    - hide_env_values keeps the token out of --help output
//
// 3. Why Option<String> for the token?
//    - The program works without one (just rate-limited), so absence is
//      a legal state, not an error
//    - Option makes that explicit in the type
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
