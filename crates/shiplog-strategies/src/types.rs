//! Version strategy types

use serde::{Deserialize, Serialize};

/// Type of version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    /// Major version bump (breaking changes)
    Major,
    /// Minor version bump (new features)
    Minor,
    /// Patch version bump (bug fixes)
    Patch,
    /// No bump
    None,
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Outcome of the branch-rule decision procedure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDecision {
    /// Next version, or the UNRELEASED sentinel for ignored branches
    pub version: String,
    /// Whether this run should deploy (and patch the manifest)
    pub deploy: bool,
}

impl VersionDecision {
    /// A decision that skips deployment entirely
    pub fn skipped() -> Self {
        Self {
            version: shiplog_core::VERSION_UNRELEASED.to_string(),
            deploy: false,
        }
    }

    /// A deploying decision for the given version
    pub fn deploy(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            deploy: true,
        }
    }
}
