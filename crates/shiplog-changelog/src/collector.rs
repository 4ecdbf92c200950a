//! Raw commit collection
//!
//! Two modes: `pr` collects the commits unique to a branch relative to the
//! upstream default branch; `release` reads the single squash commit at HEAD
//! and splits its body into synthetic per-line commits.

use serde::Serialize;
use tracing::{debug, instrument};

use shiplog_git::{CommitInfo, GitRepo, Result};

/// The squash commit at HEAD together with its derived logical commits
#[derive(Debug, Clone, Serialize)]
pub struct SquashCommit {
    /// Squash commit subject
    pub subject: String,
    /// Short hash
    pub sha: String,
    /// Full hash
    pub sha_full: String,
    /// One synthetic commit per non-empty body line
    pub commits: Vec<CommitInfo>,
}

/// Collect the commits unique to a PR branch.
///
/// `base` is the remote-tracking ref of the upstream default branch
/// (e.g. `origin/main`). Failures here (missing branch, missing base ref,
/// no common ancestor) are collector errors; preview callers degrade them
/// to an empty commit set rather than failing the run.
#[instrument(skip(repo))]
pub fn collect_pr(repo: &GitRepo, branch: &str, base: &str) -> Result<Vec<CommitInfo>> {
    let commits = repo.commits_since_ancestor(branch, base)?;
    debug!(branch, base, count = commits.len(), "collected PR commits");
    Ok(commits)
}

/// Collect the most recent commit as a squash.
///
/// Each non-empty trimmed body line becomes a synthetic [`CommitInfo`] with
/// that line as subject, no body and no hashes. Blank lines are skipped.
#[instrument(skip(repo))]
pub fn collect_squash(repo: &GitRepo) -> Result<SquashCommit> {
    let head = repo.head_commit_info()?;

    let commits: Vec<CommitInfo> = head
        .body
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(CommitInfo::synthetic)
        .collect();

    debug!(
        subject = %head.subject,
        lines = commits.len(),
        "split squash commit body"
    );

    Ok(SquashCommit {
        subject: head.subject,
        sha: head.short_hash,
        sha_full: head.hash,
        commits,
    })
}
