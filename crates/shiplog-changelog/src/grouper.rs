//! Commit grouping

use tracing::{debug, instrument};

use shiplog_git::CommitInfo;

use crate::parser::{is_noise, parse_subject};
use crate::types::{CommitEntry, GroupedCommits};

/// Group commits into the two-level `type -> scope -> [entries]` mapping.
///
/// A single fold over the input: noise subjects (and empty ones) are
/// dropped, everything else is classified by [`parse_subject`] and appended
/// in arrival order. Entries are never merged or deduplicated, even when
/// two commits carry identical descriptions.
#[instrument(skip(commits, noise_prefixes), fields(commit_count = commits.len()))]
pub fn group(commits: &[CommitInfo], noise_prefixes: &[String]) -> GroupedCommits {
    let mut grouped = GroupedCommits::new();

    for commit in commits {
        let subject = commit.subject.trim();
        if subject.is_empty() || is_noise(subject, noise_prefixes) {
            continue;
        }

        let parsed = parse_subject(subject);
        grouped.push(
            &parsed.commit_type,
            CommitEntry {
                title: parsed.description,
                scope: parsed.scope,
                body: commit.body.clone().unwrap_or_default(),
                sha: commit.short_hash.clone(),
                sha_full: commit.hash.clone(),
            },
        );
    }

    debug!(
        types = grouped.type_count(),
        entries = grouped.entry_count(),
        "grouped commits"
    );
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NO_SCOPE;

    fn commits(subjects: &[&str]) -> Vec<CommitInfo> {
        subjects
            .iter()
            .map(|s| CommitInfo::synthetic(*s))
            .collect()
    }

    fn noise() -> Vec<String> {
        vec!["wip:".to_string()]
    }

    #[test]
    fn test_group_scenario_pr() {
        let input = commits(&["feat(api): add endpoint", "wip: tmp", "fix: null check"]);
        let grouped = group(&input, &noise());

        let feat = &grouped.get("feat").unwrap()["api"];
        assert_eq!(feat.len(), 1);
        assert_eq!(feat[0].title, "add endpoint");
        assert_eq!(feat[0].scope, "api");

        let fix = &grouped.get("fix").unwrap()[NO_SCOPE];
        assert_eq!(fix[0].title, "null check");

        // wip commit dropped entirely
        assert_eq!(grouped.entry_count(), 2);
    }

    #[test]
    fn test_group_preserves_order_within_scope() {
        let input = commits(&["feat: A", "feat: B"]);
        let grouped = group(&input, &noise());

        let entries = &grouped.get("feat").unwrap()[NO_SCOPE];
        assert_eq!(entries[0].title, "A");
        assert_eq!(entries[1].title, "B");
    }

    #[test]
    fn test_group_wip_case_insensitive() {
        let input = commits(&["WIP: loud", "Wip: mixed", "feat: real"]);
        let grouped = group(&input, &noise());

        assert_eq!(grouped.entry_count(), 1);
        assert!(grouped.get("other").is_none());
    }

    #[test]
    fn test_group_empty_description_kept() {
        let input = commits(&["chore:"]);
        let grouped = group(&input, &noise());

        let entries = &grouped.get("chore").unwrap()[NO_SCOPE];
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
    }

    #[test]
    fn test_group_non_conventional_goes_to_other() {
        let input = commits(&["Update readme"]);
        let grouped = group(&input, &noise());

        let entries = &grouped.get("other").unwrap()[NO_SCOPE];
        assert_eq!(entries[0].title, "Update readme");
    }

    #[test]
    fn test_group_is_deterministic() {
        let input = commits(&["feat(a): one", "fix: two", "feat(b): three", "feat(a): four"]);

        let first = group(&input, &noise());
        let second = group(&input, &noise());

        let keys_a: Vec<_> = first.iter().map(|(t, _)| t.clone()).collect();
        let keys_b: Vec<_> = second.iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(keys_a, keys_b);
        assert_eq!(first.entry_count(), second.entry_count());

        let a = &first.get("feat").unwrap()["a"];
        let b = &second.get("feat").unwrap()["a"];
        assert_eq!(a, b);
    }

    #[test]
    fn test_group_carries_hashes() {
        let commit = CommitInfo::new(
            "abcdef1234567890",
            "fix(core): carry hash",
            "Test",
            "t@example.com",
            chrono::Utc::now(),
        );

        let grouped = group(&[commit], &noise());
        let entry = &grouped.get("fix").unwrap()["core"][0];
        assert_eq!(entry.sha, "abcdef1");
        assert_eq!(entry.sha_full, "abcdef1234567890");
    }
}
