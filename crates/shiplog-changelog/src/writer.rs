//! Changelog file writing

use std::path::Path;

use tracing::{debug, instrument};

use shiplog_core::error::ChangelogError;

type Result<T> = std::result::Result<T, ChangelogError>;

/// Prepend a rendered section to the persistent changelog file.
///
/// The new section comes first, separated from the prior content by exactly
/// one blank line; the result is trimmed of trailing whitespace and
/// terminated with a single newline. The file is created if absent.
#[instrument(skip(section), fields(path = %path.display(), section_len = section.len()))]
pub fn prepend_section(path: &Path, section: &str) -> Result<()> {
    let previous = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(ChangelogError::Io(e)),
    };

    let combined = if previous.trim().is_empty() {
        format!("{}\n", section.trim_end())
    } else {
        format!("{}\n\n{}\n", section.trim_end(), previous.trim_end())
    };

    std::fs::write(path, combined)
        .map_err(|e| ChangelogError::WriteFailed(format!("{}: {}", path.display(), e)))?;

    debug!("changelog section prepended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepend_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        prepend_section(&path, "# 1.0.0\n\n- change\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# 1.0.0\n\n- change\n");
    }

    #[test]
    fn test_prepend_to_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "OLD").unwrap();

        prepend_section(&path, "NEW").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "NEW\n\nOLD\n");
    }

    #[test]
    fn test_prepend_normalizes_trailing_whitespace() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "# 1.0.0\n\n- old\n\n\n").unwrap();

        prepend_section(&path, "# 1.1.0\n\n- new\n\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# 1.1.0\n\n- new\n\n# 1.0.0\n\n- old\n");
    }

    #[test]
    fn test_prepend_most_recent_first() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        prepend_section(&path, "# 1.0.0").unwrap();
        prepend_section(&path, "# 1.1.0").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# 1.1.0\n\n# 1.0.0\n");
    }
}
