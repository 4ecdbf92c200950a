//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;

use super::types::Config;

type Result<T> = std::result::Result<T, ConfigError>;

/// Validate a loaded configuration.
///
/// Every branch rule pattern must compile; a bad pattern is a configuration
/// fault, not a runtime versioning fault.
pub fn validate_config(config: &Config) -> Result<()> {
    let rule_lists = [
        ("branches.major", &config.branches.major),
        ("branches.minor", &config.branches.minor),
        ("branches.patch", &config.branches.patch),
        ("branches.prerelease", &config.branches.prerelease),
        ("branches.prerelease_ignore", &config.branches.prerelease_ignore),
        ("branches.release_ignore", &config.branches.release_ignore),
    ];

    for (field, patterns) in rule_lists {
        for pattern in patterns {
            Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("pattern '{}' does not compile: {}", pattern, e),
            })?;
        }
    }

    if config.changelog.file.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    debug!("configuration validated");
    Ok(())
}
