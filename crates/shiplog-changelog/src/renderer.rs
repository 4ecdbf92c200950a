//! Changelog rendering
//!
//! The renderer is a pure projection: it assembles a complete context
//! object and hands it to a handlebars template. Every field the template
//! may reference is always present; absent values are serialized as
//! explicit `null`, never as missing keys.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, instrument};

use shiplog_core::error::RenderError;
use shiplog_core::is_unreleased;

use crate::types::GroupedCommits;

type Result<T> = std::result::Result<T, RenderError>;

const TEMPLATE_NAME: &str = "changelog";

/// Packaged default template
const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.md.hbs");

/// Squash metadata exposed to the template in release mode
#[derive(Debug, Clone, Serialize)]
pub struct SquashContext {
    /// Squash commit subject
    pub subject: String,
    /// Short hash
    pub sha: String,
    /// Full hash
    pub sha_full: String,
}

/// Complete template context
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Resolved document title
    pub title: String,
    /// Caller-supplied version string (possibly the UNRELEASED sentinel)
    pub version: String,
    /// PR branch name
    pub branch: String,
    /// Grouped commits
    pub commits: GroupedCommits,
    /// Repository base URL for commit links
    pub repo_url: Option<String>,
    /// Squash metadata (release mode only)
    pub squash: Option<SquashContext>,
    /// Whether the version is the UNRELEASED sentinel
    pub unreleased: bool,
    /// Render date (YYYY-MM-DD)
    pub date: String,
}

/// Resolve the document title.
///
/// A version equal to the `UNRELEASED` sentinel (case-insensitive) falls
/// back to the squash commit subject in release mode, or to a branch
/// preview title in PR mode. Anything else is used verbatim.
pub fn resolve_title(version: &str, branch: &str, squash_subject: Option<&str>) -> String {
    if is_unreleased(version) {
        match squash_subject {
            Some(subject) => subject.to_string(),
            None => format!("Changelog preview for {}", branch),
        }
    } else {
        version.to_string()
    }
}

/// Handlebars-backed changelog renderer
pub struct ChangelogRenderer {
    registry: Handlebars<'static>,
}

impl ChangelogRenderer {
    /// Create a renderer using the packaged default template
    pub fn new() -> Result<Self> {
        Self::from_template_string(DEFAULT_TEMPLATE)
    }

    /// Create a renderer from a template file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RenderError::TemplateNotFound(path.to_path_buf()));
        }
        let template = std::fs::read_to_string(path)?;
        Self::from_template_string(&template)
    }

    fn from_template_string(template: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| RenderError::TemplateSyntax(e.to_string()))?;

        Ok(Self { registry })
    }

    /// Render the context into the final Markdown document
    #[instrument(skip(self, context), fields(title = %context.title, entries = context.commits.entry_count()))]
    pub fn render(&self, context: &RenderContext) -> Result<String> {
        let output = self
            .registry
            .render(TEMPLATE_NAME, context)
            .map_err(|e| RenderError::RenderFailed(e.to_string()))?;

        debug!(output_len = output.len(), "changelog rendered");
        Ok(output)
    }
}
