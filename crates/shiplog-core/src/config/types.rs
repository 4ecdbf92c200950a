//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for shiplog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Git configuration
    pub git: GitConfig,

    /// Branch-pattern versioning rules
    pub branches: BranchRulesConfig,

    /// Version manifest configuration
    pub manifest: ManifestConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file name, relative to the working directory
    pub file: String,

    /// Subject prefixes treated as noise and dropped before grouping
    pub noise_prefixes: Vec<String>,

    /// Template file overriding the packaged default
    pub template: Option<PathBuf>,

    /// Repository base URL used for commit links
    pub repo_url: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: "CHANGELOG.md".to_string(),
            noise_prefixes: vec!["wip:".to_string()],
            template: None,
            repo_url: None,
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote name
    pub remote: String,

    /// Default branch on the remote
    pub default_branch: String,
}

impl GitConfig {
    /// Remote-tracking ref of the default branch (e.g. `origin/main`)
    pub fn base_ref(&self) -> String {
        format!("{}/{}", self.remote, self.default_branch)
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            default_branch: "main".to_string(),
        }
    }
}

/// Branch-pattern rules driving the `version` command.
///
/// Each list holds regex patterns matched against the full branch name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchRulesConfig {
    /// Branches triggering a major bump
    pub major: Vec<String>,

    /// Branches triggering a minor bump
    pub minor: Vec<String>,

    /// Branches triggering a patch bump
    pub patch: Vec<String>,

    /// Branches allowed to produce prerelease versions
    pub prerelease: Vec<String>,

    /// Branches skipped in prerelease runs
    pub prerelease_ignore: Vec<String>,

    /// Branches skipped in release runs
    pub release_ignore: Vec<String>,
}

impl Default for BranchRulesConfig {
    fn default() -> Self {
        Self {
            major: Vec::new(),
            minor: vec!["feature/.*".to_string(), "feat/.*".to_string()],
            patch: vec![
                "fix/.*".to_string(),
                "hotfix/.*".to_string(),
                "bugfix/.*".to_string(),
            ],
            prerelease: vec![
                "feature/.*".to_string(),
                "feat/.*".to_string(),
                "fix/.*".to_string(),
            ],
            prerelease_ignore: Vec::new(),
            release_ignore: Vec::new(),
        }
    }
}

/// Version manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Path to the manifest holding the current version
    pub path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Cargo.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.changelog.file, "CHANGELOG.md");
        assert_eq!(config.changelog.noise_prefixes, vec!["wip:"]);
        assert_eq!(config.git.base_ref(), "origin/main");
        assert!(config.branches.major.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
name = "demo"

[changelog]
file = "HISTORY.md"
repo_url = "https://github.com/acme/demo"

[git]
default_branch = "master"

[branches]
major = ["breaking/.*"]
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.name.as_deref(), Some("demo"));
        assert_eq!(config.changelog.file, "HISTORY.md");
        assert_eq!(config.git.base_ref(), "origin/master");
        assert_eq!(config.branches.major, vec!["breaking/.*"]);
        // Untouched sections keep their defaults
        assert_eq!(config.changelog.noise_prefixes, vec!["wip:"]);
    }
}
