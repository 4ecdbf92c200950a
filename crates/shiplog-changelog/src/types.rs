//! Changelog types

use indexmap::IndexMap;
use serde::Serialize;

/// Scope sentinel for commits without a parenthesized scope
pub const NO_SCOPE: &str = "(no scope)";

/// Type bucket for subjects that do not match the conventional pattern
pub const FALLBACK_TYPE: &str = "other";

/// A commit subject decomposed into its conventional parts.
///
/// Produced by a total function: unparseable subjects land in the
/// [`FALLBACK_TYPE`] bucket with the whole trimmed subject as description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSubject {
    /// Commit type (feat, fix, ... or "other")
    pub commit_type: String,
    /// Scope, or the literal "(no scope)" sentinel
    pub scope: String,
    /// Trimmed description (may be empty)
    pub description: String,
}

/// One grouped commit as exposed to the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitEntry {
    /// Commit description
    pub title: String,
    /// Scope, or the "(no scope)" sentinel
    pub scope: String,
    /// Commit body (empty for synthetic squash-line commits)
    pub body: String,
    /// Short hash (empty for synthetic commits)
    pub sha: String,
    /// Full hash (empty for synthetic commits)
    pub sha_full: String,
}

/// Two-level mapping `type -> scope -> [entries]`.
///
/// Scope keys and entries keep insertion order, which is the source log
/// order of the underlying commits.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GroupedCommits(IndexMap<String, IndexMap<String, Vec<CommitEntry>>>);

impl GroupedCommits {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to its `(type, scope)` bucket, preserving order
    pub fn push(&mut self, commit_type: &str, entry: CommitEntry) {
        self.0
            .entry(commit_type.to_string())
            .or_default()
            .entry(entry.scope.clone())
            .or_default()
            .push(entry);
    }

    /// Get the scope map for a type
    pub fn get(&self, commit_type: &str) -> Option<&IndexMap<String, Vec<CommitEntry>>> {
        self.0.get(commit_type)
    }

    /// Iterate over `(type, scope map)` pairs in insertion order
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&String, &IndexMap<String, Vec<CommitEntry>>)> {
        self.0.iter()
    }

    /// Number of distinct types
    pub fn type_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of grouped entries
    pub fn entry_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|scopes| scopes.values())
            .map(|entries| entries.len())
            .sum()
    }

    /// Whether no commit survived filtering
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, scope: &str) -> CommitEntry {
        CommitEntry {
            title: title.to_string(),
            scope: scope.to_string(),
            body: String::new(),
            sha: String::new(),
            sha_full: String::new(),
        }
    }

    #[test]
    fn test_push_preserves_order() {
        let mut grouped = GroupedCommits::new();
        grouped.push("feat", entry("A", NO_SCOPE));
        grouped.push("feat", entry("B", NO_SCOPE));

        let entries = &grouped.get("feat").unwrap()[NO_SCOPE];
        assert_eq!(entries[0].title, "A");
        assert_eq!(entries[1].title, "B");
    }

    #[test]
    fn test_identical_entries_not_merged() {
        let mut grouped = GroupedCommits::new();
        grouped.push("fix", entry("same", NO_SCOPE));
        grouped.push("fix", entry("same", NO_SCOPE));

        assert_eq!(grouped.entry_count(), 2);
    }

    #[test]
    fn test_counts() {
        let mut grouped = GroupedCommits::new();
        assert!(grouped.is_empty());

        grouped.push("feat", entry("A", "api"));
        grouped.push("fix", entry("B", NO_SCOPE));

        assert_eq!(grouped.type_count(), 2);
        assert_eq!(grouped.entry_count(), 2);
        assert!(!grouped.is_empty());
    }
}
