//! TOML manifest handling

use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml_edit::{value, DocumentMut};
use tracing::{debug, instrument};

use shiplog_core::error::ManifestError;

type Result<T> = std::result::Result<T, ManifestError>;

/// Version tables recognized in a manifest, in lookup order
const VERSION_TABLES: &[&str] = &["package", "project"];

#[derive(Debug, Clone, Deserialize)]
struct ManifestDoc {
    package: Option<VersionTable>,
    project: Option<VersionTable>,
}

#[derive(Debug, Clone, Deserialize)]
struct VersionTable {
    name: Option<String>,
    version: Option<String>,
}

/// A loaded version manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    /// Project name, if declared
    pub name: Option<String>,
    /// Current version
    pub version: String,
}

impl Manifest {
    /// Load a manifest and extract its version.
    ///
    /// `[package]` is preferred over `[project]` when both exist.
    #[instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ManifestError::NotFound(path.to_path_buf()))?;

        let doc: ManifestDoc =
            toml::from_str(&content).map_err(|e| ManifestError::ParseError(e.to_string()))?;

        let table = doc
            .package
            .or(doc.project)
            .ok_or_else(|| ManifestError::MissingVersion(path.to_path_buf()))?;

        let version = table
            .version
            .ok_or_else(|| ManifestError::MissingVersion(path.to_path_buf()))?;

        debug!(version = %version, "manifest loaded");
        Ok(Self {
            path: path.to_path_buf(),
            name: table.name,
            version,
        })
    }

    /// Update the version in place, preserving formatting and comments
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn update_version(&self, version: &str) -> Result<()> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|_| ManifestError::NotFound(self.path.clone()))?;

        let mut doc: DocumentMut = content
            .parse()
            .map_err(|e: toml_edit::TomlError| ManifestError::ParseError(e.to_string()))?;

        let table_name = VERSION_TABLES
            .iter()
            .find(|name| doc.get(*name).and_then(|item| item.as_table()).is_some())
            .ok_or_else(|| {
                ManifestError::ParseError("no [package] or [project] section found".to_string())
            })?;
        let table = doc
            .get_mut(table_name)
            .and_then(|item| item.as_table_mut())
            .expect("table presence checked above");

        table["version"] = value(version);

        std::fs::write(&self.path, doc.to_string())
            .map_err(|e| ManifestError::UpdateFailed(e.to_string()))?;

        debug!(version, "manifest version updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_package_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Cargo.toml");
        std::fs::write(
            &path,
            r#"
[package]
name = "demo"
version = "1.2.3"
"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("demo"));
        assert_eq!(manifest.version, "1.2.3");
    }

    #[test]
    fn test_load_project_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        std::fs::write(
            &path,
            r#"
[project]
name = "demo"
version = "0.4.0"
"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.version, "0.4.0");
    }

    #[test]
    fn test_load_missing_version() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Cargo.toml");
        std::fs::write(&path, "[package]\nname = \"demo\"\n").unwrap();

        assert!(matches!(
            Manifest::load(&path),
            Err(ManifestError::MissingVersion(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        assert!(matches!(
            Manifest::load(&path),
            Err(ManifestError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_version_preserves_formatting() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Cargo.toml");

        let original = r#"[package]
name = "demo"
version = "1.0.0"

# pinned on purpose

[dependencies]
serde = "1.0"
"#;
        std::fs::write(&path, original).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        manifest.update_version("2.0.0").unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        assert!(updated.contains("version = \"2.0.0\""));
        assert!(updated.contains("# pinned on purpose"));
        assert!(updated.contains("[dependencies]"));
    }

    #[test]
    fn test_update_project_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        std::fs::write(&path, "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        manifest.update_version("0.2.0-dev.5").unwrap();

        let reloaded = Manifest::load(&path).unwrap();
        assert_eq!(reloaded.version, "0.2.0-dev.5");
    }
}
