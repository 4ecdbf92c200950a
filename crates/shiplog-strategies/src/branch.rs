//! Branch-rule version decisions

use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};
use tracing::{debug, instrument};

use shiplog_core::config::BranchRulesConfig;
use shiplog_core::error::VersionError;

use crate::types::{BumpType, VersionDecision};

type Result<T> = std::result::Result<T, VersionError>;

/// Compiled branch rules.
///
/// Patterns are matched against the whole branch name (anchored), the same
/// way a fullmatch works.
pub struct BranchRules {
    major: Vec<Regex>,
    minor: Vec<Regex>,
    patch: Vec<Regex>,
    prerelease: Vec<Regex>,
    prerelease_ignore: Vec<Regex>,
    release_ignore: Vec<Regex>,
}

impl BranchRules {
    /// Compile rules from configuration
    pub fn from_config(config: &BranchRulesConfig) -> Result<Self> {
        Ok(Self {
            major: compile_patterns(&config.major)?,
            minor: compile_patterns(&config.minor)?,
            patch: compile_patterns(&config.patch)?,
            prerelease: compile_patterns(&config.prerelease)?,
            prerelease_ignore: compile_patterns(&config.prerelease_ignore)?,
            release_ignore: compile_patterns(&config.release_ignore)?,
        })
    }

    /// Which bump class the branch falls into.
    ///
    /// Minor rules take precedence over major, then patch; the first
    /// matching class wins and a branch matching nothing bumps nothing.
    pub fn bump_type(&self, branch: &str) -> BumpType {
        if matches_any(branch, &self.minor) {
            BumpType::Minor
        } else if matches_any(branch, &self.major) {
            BumpType::Major
        } else if matches_any(branch, &self.patch) {
            BumpType::Patch
        } else {
            BumpType::None
        }
    }

    /// Decide the next version for a branch.
    ///
    /// Ignored branches yield the UNRELEASED sentinel and no deploy.
    /// Prerelease runs require the branch to match a prerelease rule and
    /// append a `-dev.<commit_count>` prerelease (plus `+g<sha>` build
    /// metadata when a commit hash is available). Release runs always
    /// deploy the bumped version.
    #[instrument(skip(self))]
    pub fn next_version(
        &self,
        branch: &str,
        prerelease: bool,
        current: &str,
        commit_count: u64,
        build_sha: Option<&str>,
    ) -> Result<VersionDecision> {
        let ignored = if prerelease {
            matches_any(branch, &self.prerelease_ignore)
        } else {
            matches_any(branch, &self.release_ignore)
        };
        if ignored {
            debug!(branch, prerelease, "branch ignored by rules");
            return Ok(VersionDecision::skipped());
        }

        let bump = self.bump_type(branch);
        let next = bump_version(current, bump)?;

        if prerelease {
            if matches_any(branch, &self.prerelease) {
                let mut version = next;
                version.pre = Prerelease::new(&format!("dev.{}", commit_count))?;
                if let Some(sha) = build_sha {
                    version.build = BuildMetadata::new(&format!("g{}", sha))?;
                }
                return Ok(VersionDecision::deploy(version.to_string()));
            }
            return Err(VersionError::NoRuleMatched(branch.to_string()));
        }

        Ok(VersionDecision::deploy(next.to_string()))
    }
}

/// Apply a bump to a version string, clearing prerelease and build metadata
fn bump_version(current: &str, bump: BumpType) -> Result<Version> {
    let current = current.strip_prefix('v').unwrap_or(current);
    let mut version = Version::parse(current)
        .map_err(|e| VersionError::ParseFailed(current.to_string(), e.to_string()))?;

    match bump {
        BumpType::Major => {
            version.major += 1;
            version.minor = 0;
            version.patch = 0;
        }
        BumpType::Minor => {
            version.minor += 1;
            version.patch = 0;
        }
        BumpType::Patch => {
            version.patch += 1;
        }
        BumpType::None => {}
    }

    version.pre = Prerelease::EMPTY;
    version.build = BuildMetadata::EMPTY;
    Ok(version)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| VersionError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

fn matches_any(branch: &str, rules: &[Regex]) -> bool {
    rules.iter().any(|rule| rule.is_match(branch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> BranchRules {
        let config = BranchRulesConfig {
            major: vec!["breaking/.*".to_string()],
            minor: vec!["feature/.*".to_string()],
            patch: vec!["fix/.*".to_string()],
            prerelease: vec!["feature/.*".to_string(), "fix/.*".to_string()],
            prerelease_ignore: vec!["dependabot/.*".to_string()],
            release_ignore: vec!["docs/.*".to_string()],
        };
        BranchRules::from_config(&config).unwrap()
    }

    #[test]
    fn test_bump_type_precedence() {
        let rules = rules();
        assert_eq!(rules.bump_type("feature/api"), BumpType::Minor);
        assert_eq!(rules.bump_type("breaking/drop"), BumpType::Major);
        assert_eq!(rules.bump_type("fix/null"), BumpType::Patch);
        assert_eq!(rules.bump_type("chore/tidy"), BumpType::None);
    }

    #[test]
    fn test_patterns_are_anchored() {
        let rules = rules();
        // "prefix-feature/x" must not match "feature/.*"
        assert_eq!(rules.bump_type("prefix-feature/x"), BumpType::None);
    }

    #[test]
    fn test_release_minor_bump() {
        let decision = rules()
            .next_version("feature/api", false, "1.2.3", 0, None)
            .unwrap();
        assert_eq!(decision.version, "1.3.0");
        assert!(decision.deploy);
    }

    #[test]
    fn test_release_major_bump() {
        let decision = rules()
            .next_version("breaking/drop", false, "1.2.3", 0, None)
            .unwrap();
        assert_eq!(decision.version, "2.0.0");
    }

    #[test]
    fn test_release_patch_bump() {
        let decision = rules()
            .next_version("fix/null", false, "1.2.3", 0, None)
            .unwrap();
        assert_eq!(decision.version, "1.2.4");
    }

    #[test]
    fn test_release_unmatched_branch_keeps_version() {
        let decision = rules()
            .next_version("chore/tidy", false, "1.2.3", 0, None)
            .unwrap();
        assert_eq!(decision.version, "1.2.3");
        assert!(decision.deploy);
    }

    #[test]
    fn test_release_ignore() {
        let decision = rules()
            .next_version("docs/readme", false, "1.2.3", 0, None)
            .unwrap();
        assert_eq!(decision.version, "UNRELEASED");
        assert!(!decision.deploy);
    }

    #[test]
    fn test_prerelease_dev_version() {
        let decision = rules()
            .next_version("feature/api", true, "1.2.3", 42, None)
            .unwrap();
        assert_eq!(decision.version, "1.3.0-dev.42");
        assert!(decision.deploy);
    }

    #[test]
    fn test_prerelease_with_build_sha() {
        let decision = rules()
            .next_version("feature/api", true, "1.2.3", 42, Some("abc1234"))
            .unwrap();
        assert_eq!(decision.version, "1.3.0-dev.42+gabc1234");
    }

    #[test]
    fn test_prerelease_ignore() {
        let decision = rules()
            .next_version("dependabot/bump-serde", true, "1.2.3", 7, None)
            .unwrap();
        assert!(!decision.deploy);
    }

    #[test]
    fn test_prerelease_unmatched_branch_errors() {
        let result = rules().next_version("chore/tidy", true, "1.2.3", 7, None);
        assert!(matches!(result, Err(VersionError::NoRuleMatched(_))));
    }

    #[test]
    fn test_bump_clears_prerelease() {
        let version = bump_version("1.2.3-dev.9+gdeadbee", BumpType::Patch).unwrap();
        assert_eq!(version.to_string(), "1.2.4");
    }

    #[test]
    fn test_bad_current_version() {
        let result = rules().next_version("feature/api", false, "not-a-version", 0, None);
        assert!(matches!(result, Err(VersionError::ParseFailed(..))));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let config = BranchRulesConfig {
            major: vec!["(".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            BranchRules::from_config(&config),
            Err(VersionError::InvalidPattern { .. })
        ));
    }
}
