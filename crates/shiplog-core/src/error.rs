//! Error types for shiplog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShiplogError
pub type Result<T> = std::result::Result<T, ShiplogError>;

/// Main error type for shiplog operations
#[derive(Debug, Error)]
pub enum ShiplogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Template rendering errors
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Manifest-related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
///
/// Collector failures (missing ref, undeterminable ancestor, empty
/// repository) surface here; PR preview flows downgrade them to an empty
/// commit set while release flows treat them as fatal.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// A named ref could not be resolved
    #[error("Failed to resolve ref '{0}'")]
    RefNotFound(String),

    /// No common ancestor between two refs
    #[error("No common ancestor between '{branch}' and '{base}'")]
    AncestorNotFound { branch: String, base: String },

    /// No commits found
    #[error("No commits found in repository")]
    NoCommits,

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Failed to parse version
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, String),

    /// A branch rule pattern did not compile
    #[error("Invalid branch pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Branch matched no configured rule
    #[error("Branch '{0}' does not match any versioning rule")]
    NoRuleMatched(String),

    /// Semver error
    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write changelog
    #[error("Failed to write changelog: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Template rendering errors
///
/// Always fatal: there is no safe default document to emit when the
/// template cannot be loaded or rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template file not found
    #[error("Template file not found at {0}")]
    TemplateNotFound(PathBuf),

    /// Template failed to compile
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    /// Template failed to render
    #[error("Template rendering failed: {0}")]
    RenderFailed(String),

    /// IO error
    #[error("IO error reading template: {0}")]
    Io(#[from] std::io::Error),
}

/// Manifest-related errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest not found at {0}")]
    NotFound(PathBuf),

    /// Failed to parse manifest
    #[error("Failed to parse manifest: {0}")]
    ParseError(String),

    /// Manifest has no version field
    #[error("No version field in manifest {0}")]
    MissingVersion(PathBuf),

    /// Failed to update manifest
    #[error("Failed to update manifest: {0}")]
    UpdateFailed(String),
}

impl ShiplogError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
