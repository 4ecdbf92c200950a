//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::{Oid, Sort};
use tracing::{debug, instrument};

use shiplog_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Resolve a ref name (branch, remote-tracking ref, hash) to an OID
    pub fn resolve_ref(&self, name: &str) -> Result<Oid> {
        self.repo
            .revparse_single(name)
            .map(|obj| obj.id())
            .map_err(|_| GitError::RefNotFound(name.to_string()))
    }

    /// Get the commits unique to a branch relative to a base ref.
    ///
    /// Computes the common ancestor of `branch` and `base`, then walks every
    /// commit reachable from HEAD but not from that ancestor, newest-first.
    #[instrument(skip(self))]
    pub fn commits_since_ancestor(&self, branch: &str, base: &str) -> Result<Vec<CommitInfo>> {
        let branch_oid = self.resolve_ref(branch)?;
        let base_oid = self.resolve_ref(base)?;

        let ancestor = self
            .repo
            .merge_base(branch_oid, base_oid)
            .map_err(|_| GitError::AncestorNotFound {
                branch: branch.to_string(),
                base: base.to_string(),
            })?;

        debug!(ancestor = %ancestor, "resolved merge base");
        self.commits_since_oid(ancestor)
    }

    /// Get commits reachable from HEAD but not from `since`, newest-first
    fn commits_since_oid(&self, since: Oid) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        revwalk.hide(since)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "collected branch commits");
        Ok(commits)
    }

    /// Get the most recent commit with its full body
    pub fn head_commit_info(&self) -> Result<CommitInfo> {
        let commit = self.head_commit()?;
        Ok(commit_to_info(&commit))
    }

    /// Count commits reachable from HEAD
    pub fn rev_count(&self) -> Result<u64> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head.id())?;

        let mut count = 0u64;
        for oid in revwalk {
            oid?;
            count += 1;
        }

        Ok(count)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let author = commit.author();

    let subject = commit.summary().unwrap_or("(no message)").to_string();
    let body = commit.body().unwrap_or_default().to_string();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(
        hash,
        subject,
        author.name().unwrap_or("Unknown"),
        author.email().unwrap_or("unknown@example.com"),
        timestamp,
    )
    .with_body(body)
}
