// src/report.rs
// =============================================================================
// This module renders the collected records as a GitHub-flavored Markdown
// table.
//
// The column set is fixed. Records are rendered in the order they arrive,
// which is the order their links appeared on the listing page. The repo
// cell doubles as a link back to the repository.
//
// Rust concepts:
// - String building: push_str into one buffer instead of printing line
//   by line, so callers decide where the output goes
// - match on Option: the date column needs a placeholder when empty
// =============================================================================

use crate::github::RepoInfo;

// Each row links the repository name back to its page
const HEADER: &str = "| Repository | Latest Commit | Total Commits | Stars | Forks | Watchers | Used by | Contributors | Pull Requests |";
const SEPARATOR: &str = "|------------|---------------|---------------|-------|-------|----------|---------|--------------|---------------|";

// Renders the full table, trailing newline included
//
// An empty record list still produces the header and separator lines, so
// the output is a valid (if empty) table either way.
pub fn render_markdown_table(repos: &[RepoInfo]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    for info in repos {
        out.push_str(&render_row(info));
        out.push('\n');
    }
    out
}

// Renders one table row
fn render_row(info: &RepoInfo) -> String {
    // NaiveDate displays as YYYY-MM-DD, which is exactly the format the
    // date column uses; "-" stands in when the commit list was empty
    let date = match info.latest_commit {
        Some(date) => date.to_string(),
        None => "-".to_string(),
    };
    format!(
        "| [{owner}/{name}](https://github.com/{owner}/{name}) | {date} | {commits} | {stars} | {forks} | {watchers} | {used_by} | {contributors} | {pulls} |",
        owner = info.owner,
        name = info.name,
        date = date,
        commits = info.total_commits,
        stars = info.stars,
        forks = info.forks,
        watchers = info.watchers,
        used_by = info.used_by,
        contributors = info.contributors,
        pulls = info.pull_requests,
    )
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return a String instead of printing?
//    - The caller owns stdout; main decides whether this table or the JSON
//      form gets printed
//    - A pure function over its input is also trivially testable
//
// 2. What are the {owner}/{name} placeholders in format!?
//    - Named arguments; each `name = value` after the format string binds
//      one placeholder
//    - The same placeholder can appear twice (owner and name both do, once
//      for the link text and once for the URL)
//
// 3. Why does the separator line have those exact dash counts?
//    - Markdown only requires three dashes per column, but matching the
//      header widths keeps the raw text readable before rendering
// -----------------------------------------------------------------------------
