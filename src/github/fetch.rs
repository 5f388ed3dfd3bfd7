// src/github/fetch.rs
// =============================================================================
// This module assembles the metadata records: one per repository, and the
// loop that walks the whole discovered list.
//
// For an owner/name pair we issue, strictly one after another:
// 1. GET /repos/{owner}/{name}                      (stars, forks, watchers)
// 2. GET .../commits?per_page=1                     (latest commit date)
// 3. GET .../commits?per_page=100, following the
//    Link header until no rel="next" remains        (total commit count)
// 4. GET .../contributors?anon=true                 (contributor count)
// 5. GET .../pulls?state=all                        (pull-request count)
// 6. scrape https://github.com/{owner}/{name}       ("Used by" count)
//
// Steps 1-5 abort the whole record on failure. collect_repo_infos then
// logs that error and moves on to the next repository - one bad repo never
// ends the run. Step 6 is the one tolerated partial failure within a
// record: used_by_or_zero logs it and records zero.
//
// Rust concepts:
// - while let: Drives the pagination loop until there is no next page
// - Option combinators: and_then/map to dig the date out of the listing
// - Generic closures: the collection loop takes the per-repo fetch as a
//   parameter, which is what lets tests drive it without a network
// =============================================================================

use std::future::Future;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;

use crate::error::FetchError;
use crate::scrape::{self, RepoRef};

use super::client::{GithubClient, API_ROOT};
use super::models::{CommitEntry, Contributor, PullRequest, Repository};

// The finished metadata record for one repository
//
// Built in a single pass, then immutable. All counts are one snapshot in
// time; nothing here is ever updated after the fact.
#[derive(Debug, Clone, Serialize)]
pub struct RepoInfo {
    pub owner: String,
    pub name: String,
    /// Calendar date of the most recent commit; None when the repository
    /// reported an empty commit list (rendered as "-")
    pub latest_commit: Option<NaiveDate>,
    /// Commit count across the whole history, summed over all pages
    pub total_commits: u64,
    pub stars: u64,
    pub forks: u64,
    /// GitHub's subscriber count, which is the number people actually mean
    /// by "watchers" (the API's watchers_count field equals the star count)
    pub watchers: u64,
    /// Dependents count from the repository page; 0 when unavailable
    pub used_by: u64,
    pub contributors: u64,
    pub pull_requests: u64,
}

// Runs the fetch for every discovered repository, in order
//
// Parameters:
//   refs: the identifiers from the link extractor, in document order
//   fetch: the per-repository fetch (in the binary this is fetch_repo_info
//          with the two clients bound; tests substitute their own)
//
// Returns: the successful records, input order preserved. A repository
// whose fetch fails is logged and skipped; the loop always continues.
pub async fn collect_repo_infos<F, Fut>(refs: &[RepoRef], mut fetch: F) -> Vec<RepoInfo>
where
    F: FnMut(RepoRef) -> Fut,
    Fut: Future<Output = Result<RepoInfo, FetchError>>,
{
    let mut repos = Vec::new();
    for repo in refs {
        log::info!("fetching {repo}");
        match fetch(repo.clone()).await {
            Ok(info) => repos.push(info),
            Err(e) => log::warn!("skipping {repo}: {e}"),
        }
    }
    repos
}

// Fetches everything we report about a single repository
//
// Parameters:
//   github: the API client (authenticated when a token was configured)
//   web: the plain client used for the page scrape in step 6
//   repo: the identifier pair from the link extractor
//
// Returns: a fully populated RepoInfo, or the first error from steps 1-5.
pub async fn fetch_repo_info(
    github: &GithubClient,
    web: &Client,
    repo: RepoRef,
) -> Result<RepoInfo, FetchError> {
    // Step 1: repository metadata
    let metadata: Repository = github.get_json(&format!("{API_ROOT}/repos/{repo}")).await?;

    // Step 2: the single most recent commit carries the date we display.
    // An empty list with a clean status is possible in principle; we keep
    // going and leave the date unset rather than dropping the record.
    let newest: Vec<CommitEntry> = github
        .get_json(&format!("{API_ROOT}/repos/{repo}/commits?per_page=1"))
        .await?;
    let latest_commit = latest_commit_date(&newest);

    // Step 3: count commits by exhausting the pagination. Each response
    // tells us whether another page follows; the loop ends on the first
    // page without a rel="next".
    let mut total_commits: u64 = 0;
    let mut next = Some(format!("{API_ROOT}/repos/{repo}/commits?per_page=100"));
    while let Some(url) = next {
        let page = github.get_page::<CommitEntry>(&url).await?;
        total_commits += page.items.len() as u64;
        next = page.next;
    }

    // Step 4: contributors, anonymous ones included. One call; the list
    // length is the count we report.
    let contributors: Vec<Contributor> = github
        .get_json(&format!("{API_ROOT}/repos/{repo}/contributors?anon=true"))
        .await?;

    // Step 5: pull requests in every state, same single-call approach
    let pulls: Vec<PullRequest> = github
        .get_json(&format!("{API_ROOT}/repos/{repo}/pulls?state=all"))
        .await?;

    // Step 6: the "Used by" counter lives only on the web page
    let used_by = used_by_or_zero(&repo, scrape::fetch_used_by_count(web, &repo.page_url()).await);

    Ok(RepoInfo {
        owner: repo.owner,
        name: repo.name,
        latest_commit,
        total_commits,
        stars: metadata.stargazers_count,
        forks: metadata.forks_count,
        watchers: metadata.subscribers_count,
        used_by,
        contributors: contributors.len() as u64,
        pull_requests: pulls.len() as u64,
    })
}

// Absorbs a used-by scrape failure into a zero count
//
// The counter is best-effort: a failed fetch or unreadable counter text
// must never cost us the rest of the record, so the error stops here.
fn used_by_or_zero(repo: &RepoRef, fetched: Result<u64, FetchError>) -> u64 {
    match fetched {
        Ok(count) => count,
        Err(e) => {
            log::warn!("could not read the used-by count for {repo}: {e}");
            0
        }
    }
}

// Digs the calendar date out of a commit listing
//
// None when the listing is empty, and also when the newest commit has no
// author signature (git allows that; GitHub serializes it as null).
fn latest_commit_date(commits: &[CommitEntry]) -> Option<NaiveDate> {
    commits
        .first()
        .and_then(|entry| entry.commit.author.as_ref())
        .map(|author| author.date.date_naive())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two separate commit calls (steps 2 and 3)?
//    - Step 2 asks for exactly one item because only the newest commit's
//      date matters
//    - Step 3 re-lists with big pages because only the COUNT matters
//    - Folding them together would save one request but tangle the two
//      questions; the API treats them as separate listings anyway
//
// 2. Why `as u64` on the lengths?
//    - .len() returns usize, whose width depends on the platform
//    - The record stores u64 so the JSON output looks the same everywhere
//
// 3. Why is used_by_or_zero its own function instead of a ? call?
//    - ? would abort the record, and this step is deliberately best-effort:
//      log it, write a zero, move on
//    - As a plain function over a Result it can be tested with hand-made
//      errors, no server involved
//
// 4. What is the FnMut(RepoRef) -> Fut bound on collect_repo_infos?
//    - "any callable that takes an identifier and gives back a future of
//      a record"
//    - main passes the real fetch_repo_info; tests pass a closure that
//      fails on purpose, which is how the skip-and-continue behavior gets
//      exercised offline
// -----------------------------------------------------------------------------
