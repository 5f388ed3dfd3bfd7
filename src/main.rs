// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Scrape the listing page for GitHub repository links
// 3. Fetch the stats for each repository, one at a time
// 4. Print everything as a Markdown table (or JSON with --json)
// 5. Exit with proper code (0 = success, 1 = could not read the listing)
//
// A repository that fails along the way is logged and skipped; only a
// failure to get the initial list is fatal. Progress and warnings go to
// stderr via the logger, so stdout carries nothing but the final output
// and can be redirected straight into a README.
//
// Rust concepts used:
// - async/await: Because the whole program is network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: To keep per-repository failures from ending the run
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - the error type shared by scraping and API calls
mod github; // src/github/ - GitHub API client and per-repo fetching
mod report; // src/report.rs - Markdown table rendering
mod scrape; // src/scrape/ - HTML scraping (repo links, used-by counter)

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use github::GithubClient;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Nothing useful was produced; print the chain and bail out
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = ran to completion (skipped repositories included)
//   Err = the repository list itself could not be read
async fn run() -> Result<i32> {
    // A .env file in the working directory can hold GITHUB_TOKEN;
    // missing files are fine
    dotenvy::dotenv().ok();

    // Log to stderr, default level "info", overridable via RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    if cli.token.is_none() {
        log::warn!(
            "no GitHub token configured; unauthenticated API requests \
             are limited to 60 per hour"
        );
    }

    // Two clients: a plain one for web pages and an API client that
    // attaches the token. The token never rides along on page scrapes.
    let web = reqwest::Client::builder()
        .user_agent(github::AGENT)
        .build()
        .context("could not build the HTTP client")?;
    let github = GithubClient::new(cli.token.clone())
        .context("could not build the GitHub API client")?;

    // The one fatal step: without the list there is nothing to report
    let refs = scrape::scrape_repo_refs(&web, &cli.page_url)
        .await
        .with_context(|| format!("could not collect repository links from {}", cli.page_url))?;
    log::info!("found {} repository link(s) on {}", refs.len(), cli.page_url);

    // Fetch each repository in turn. Sequential on purpose: it keeps the
    // output in page order and stays gentle on the API rate limit. A
    // repository that fails is logged and skipped inside the loop.
    let repos =
        github::collect_repo_infos(&refs, |repo| github::fetch_repo_info(&github, &web, repo))
            .await;

    if cli.json {
        // Serialize the records to JSON and print
        let json_output = serde_json::to_string_pretty(&repos)?;
        println!("{}", json_output);
    } else {
        // The rendered table already ends in a newline
        print!("{}", report::render_markdown_table(&repos));
    }

    Ok(0)
}
