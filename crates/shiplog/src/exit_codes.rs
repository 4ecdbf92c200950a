//! Exit codes for the CLI

use shiplog_core::error::{ConfigError, GitError, ManifestError, RenderError, VersionError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Version or manifest error
pub const VERSION_ERROR: i32 = 4;

/// Template rendering error
pub const RENDER_ERROR: i32 = 5;

/// Map a command failure to its exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        CONFIG_ERROR
    } else if err.downcast_ref::<GitError>().is_some() {
        GIT_ERROR
    } else if err.downcast_ref::<VersionError>().is_some()
        || err.downcast_ref::<ManifestError>().is_some()
    {
        VERSION_ERROR
    } else if err.downcast_ref::<RenderError>().is_some() {
        RENDER_ERROR
    } else {
        ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let err = anyhow::Error::from(GitError::NoCommits);
        assert_eq!(for_error(&err), GIT_ERROR);

        let err = anyhow::Error::from(VersionError::NoRuleMatched("x".to_string()));
        assert_eq!(for_error(&err), VERSION_ERROR);

        let err = anyhow::anyhow!("anything else");
        assert_eq!(for_error(&err), ERROR);
    }
}
