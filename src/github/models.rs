// src/github/models.rs
// =============================================================================
// Wire types for the GitHub REST API responses we consume.
//
// These mirror the JSON shapes of api.github.com, but only the fields this
// tool actually reads - serde ignores everything else in the payload. If
// you need another field later, add it here and it will just start
// deserializing.
//
// Endpoints covered:
// - GET /repos/{owner}/{repo}                 -> Repository
// - GET /repos/{owner}/{repo}/commits         -> Vec<CommitEntry>
// - GET /repos/{owner}/{repo}/contributors    -> Vec<Contributor>
// - GET /repos/{owner}/{repo}/pulls           -> Vec<PullRequest>
// - any error response                        -> ApiErrorBody
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Subset of a repository object: just the three counters we report.
/// Note that GitHub's `watchers_count` equals the star count for legacy
/// reasons; the real watcher number is `subscribers_count`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub subscribers_count: u64,
}

/// One entry of a commit listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitDetail,
}

/// The git-level commit inside a listing entry.
/// `author` is the git author signature and can be null for commits with
/// broken or missing author data, so it stays optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub author: Option<CommitSignature>,
}

/// Author signature: we only care about when the commit was made.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    pub date: DateTime<Utc>,
}

/// One entry of a contributor listing. Anonymous contributors have no
/// `login`, but every entry carries a contribution count, so that is the
/// field we anchor deserialization on (the list length is all we use).
#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    #[allow(dead_code)]
    pub contributions: u64,
}

/// One entry of a pull-request listing; only the length of the list is
/// reported, so the number alone is enough to deserialize against.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    #[allow(dead_code)]
    pub number: u64,
}

/// GitHub's standard error body, e.g. {"message": "Not Found", ...}
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_counters_deserialize() {
        // Trimmed from a real /repos/{owner}/{repo} payload
        let json = r#"{
            "id": 724712,
            "name": "rust",
            "full_name": "rust-lang/rust",
            "stargazers_count": 89219,
            "watchers_count": 89219,
            "forks_count": 11876,
            "subscribers_count": 1479,
            "open_issues_count": 9403
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.stargazers_count, 89219);
        assert_eq!(repo.forks_count, 11876);
        assert_eq!(repo.subscribers_count, 1479);
    }

    #[test]
    fn test_commit_entry_with_author_date() {
        let json = r#"{
            "sha": "2c8bbf50ad5c5bf1a2a23e0f9b5b1a1b0c2d3e4f",
            "commit": {
                "author": {
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "date": "2023-04-01T12:30:45Z"
                },
                "message": "Fix the thing"
            }
        }"#;
        let entry: CommitEntry = serde_json::from_str(json).unwrap();
        let date = entry.commit.author.unwrap().date;
        assert_eq!(date.to_rfc3339(), "2023-04-01T12:30:45+00:00");
    }

    #[test]
    fn test_commit_entry_with_null_author() {
        let json = r#"{"commit": {"author": null, "message": "imported"}}"#;
        let entry: CommitEntry = serde_json::from_str(json).unwrap();
        assert!(entry.commit.author.is_none());
    }

    #[test]
    fn test_contributor_list_including_anonymous() {
        // Anonymous entries have no login, only name/email/type
        let json = r#"[
            {"login": "octocat", "contributions": 481},
            {"name": "Anon E. Mouse", "email": "anon@example.com",
             "type": "Anonymous", "contributions": 3}
        ]"#;
        let contributors: Vec<Contributor> = serde_json::from_str(json).unwrap();
        assert_eq!(contributors.len(), 2);
        assert_eq!(contributors[1].contributions, 3);
    }

    #[test]
    fn test_pull_request_list() {
        let json = r#"[
            {"number": 17, "state": "closed", "title": "Add CI"},
            {"number": 19, "state": "open", "title": "Fix typo"}
        ]"#;
        let pulls: Vec<PullRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(pulls.len(), 2);
        assert_eq!(pulls[0].number, 17);
    }

    #[test]
    fn test_api_error_body() {
        let json = r#"{
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        }"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.message, "Not Found");
    }
}
