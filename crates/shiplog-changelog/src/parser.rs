//! Conventional-commit subject parsing
//!
//! Subjects follow the Conventional Commits shape `type(scope): description`:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{ParsedSubject, FALLBACK_TYPE, NO_SCOPE};

/// Regex for conventional commit subjects.
///
/// The scope stops at the first closing parenthesis; nested parentheses are
/// not supported. The description may be empty (`chore:` is still a valid,
/// recorded subject).
static SUBJECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^)]*)\))?:\s*(?P<description>.*)$")
        .expect("Invalid regex")
});

/// Parse a commit subject into its conventional parts.
///
/// Total: subjects that do not match the pattern are classified as
/// `other` / `(no scope)` with the whole trimmed subject as description.
pub fn parse_subject(subject: &str) -> ParsedSubject {
    let subject = subject.trim();

    match SUBJECT_REGEX.captures(subject) {
        Some(caps) => {
            let commit_type = caps.name("type").map_or("", |m| m.as_str()).to_string();
            let scope = caps
                .name("scope")
                .map_or(NO_SCOPE, |m| m.as_str())
                .to_string();
            let description = caps
                .name("description")
                .map_or("", |m| m.as_str())
                .trim()
                .to_string();

            ParsedSubject {
                commit_type,
                scope,
                description,
            }
        }
        None => ParsedSubject {
            commit_type: FALLBACK_TYPE.to_string(),
            scope: NO_SCOPE.to_string(),
            description: subject.to_string(),
        },
    }
}

/// Check whether a subject carries one of the configured noise prefixes
/// (case-insensitive), e.g. `wip:`.
pub fn is_noise(subject: &str, noise_prefixes: &[String]) -> bool {
    let subject = subject.trim().to_lowercase();
    noise_prefixes
        .iter()
        .any(|prefix| subject.starts_with(&prefix.to_lowercase()))
}
