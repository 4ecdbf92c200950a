//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about a git commit.
///
/// Squash bodies are split into one synthetic `CommitInfo` per non-empty
/// line; synthetic commits carry empty hashes and no body and are never
/// rendered with a hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Subject (first line of the message)
    pub subject: String,
    /// Message body, if any
    pub body: Option<String>,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        author: impl Into<String>,
        author_email: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(7).collect();

        Self {
            hash,
            short_hash,
            subject: subject.into(),
            body: None,
            author: author.into(),
            author_email: author_email.into(),
            timestamp,
        }
    }

    /// Create a synthetic commit from a single squash-body line.
    ///
    /// Synthetic commits have no hashes, no body, and no author identity.
    pub fn synthetic(subject: impl Into<String>) -> Self {
        Self {
            hash: String::new(),
            short_hash: String::new(),
            subject: subject.into(),
            body: None,
            author: String::new(),
            author_email: String::new(),
            timestamp: Utc::now(),
        }
    }

    /// Set the commit body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    /// Whether this commit was derived from a squash-body line
    pub fn is_synthetic(&self) -> bool {
        self.hash.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_info() {
        let commit = CommitInfo::new(
            "abc1234567890",
            "feat: add feature",
            "Author",
            "author@example.com",
            Utc::now(),
        );
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.subject, "feat: add feature");
        assert!(!commit.is_synthetic());
    }

    #[test]
    fn test_synthetic_commit() {
        let commit = CommitInfo::synthetic("fix(y): B");
        assert!(commit.is_synthetic());
        assert!(commit.hash.is_empty());
        assert!(commit.short_hash.is_empty());
        assert!(commit.body.is_none());
    }

    #[test]
    fn test_with_body_drops_empty() {
        let commit = CommitInfo::new("abc", "subject", "a", "a@b", Utc::now()).with_body("");
        assert!(commit.body.is_none());
    }
}
