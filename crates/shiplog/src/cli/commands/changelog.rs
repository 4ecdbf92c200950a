//! Changelog command

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use tracing::{info, warn};

use shiplog_changelog::{
    collect_pr, collect_squash, group, prepend_section, resolve_title, ChangelogRenderer,
    RenderContext, SquashContext,
};
use shiplog_core::config::load_config_or_default;
use shiplog_core::{is_unreleased, VERSION_UNRELEASED};
use shiplog_git::GitRepo;

use crate::cli::Cli;

/// Commit collection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Commits unique to a PR branch relative to the upstream default branch
    Pr,
    /// The squash commit at HEAD, split into its logical commits
    Release,
}

/// Generate a changelog from conventional commits
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Collection mode
    #[arg(long, value_enum)]
    pub mode: Mode,

    /// PR branch name
    #[arg(long)]
    pub branch: String,

    /// Version used as the document title; the UNRELEASED sentinel
    /// triggers the fallback titles
    #[arg(long, default_value = VERSION_UNRELEASED)]
    pub version: String,

    /// Template file overriding the packaged default
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// File the rendered Markdown is written to
    #[arg(long)]
    pub output: PathBuf,

    /// Repository base URL for commit links
    #[arg(long)]
    pub repo_url: Option<String>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(mode = ?self.mode, branch = %self.branch, version = %self.version, "executing changelog command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let repo_url = self
            .repo_url
            .clone()
            .or_else(repo_url_from_env)
            .or_else(|| config.changelog.repo_url.clone());

        let (commits, squash) = match self.mode {
            Mode::Pr => {
                // A preview must stay usable on unusual branch states:
                // collector faults degrade to an empty commit set.
                let collected = GitRepo::discover(&cwd)
                    .and_then(|repo| collect_pr(&repo, &self.branch, &config.git.base_ref()));
                let commits = match collected {
                    Ok(commits) => commits,
                    Err(e) => {
                        warn!(error = %e, "commit collection failed, rendering empty preview");
                        Vec::new()
                    }
                };
                (commits, None)
            }
            Mode::Release => {
                let repo = GitRepo::discover(&cwd)?;
                let squash = collect_squash(&repo)?;
                (squash.commits.clone(), Some(squash))
            }
        };

        let grouped = group(&commits, &config.changelog.noise_prefixes);

        let template = self
            .template
            .clone()
            .or_else(|| config.changelog.template.clone());
        let renderer = match &template {
            Some(path) => ChangelogRenderer::from_file(path)?,
            None => ChangelogRenderer::new()?,
        };

        let context = RenderContext {
            title: resolve_title(
                &self.version,
                &self.branch,
                squash.as_ref().map(|s| s.subject.as_str()),
            ),
            version: self.version.clone(),
            branch: self.branch.clone(),
            commits: grouped,
            repo_url,
            squash: squash.map(|s| SquashContext {
                subject: s.subject,
                sha: s.sha,
                sha_full: s.sha_full,
            }),
            unreleased: is_unreleased(&self.version),
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        };

        let document = renderer.render(&context)?;

        std::fs::write(&self.output, &document)?;
        print!("{}", document);

        if self.mode == Mode::Release {
            let changelog_path = cwd.join(&config.changelog.file);
            prepend_section(&changelog_path, &document)?;

            if !cli.quiet {
                eprintln!(
                    "{} Changelog updated at {}",
                    style("✓").green().bold(),
                    style(changelog_path.display()).cyan()
                );
            }
        }

        Ok(())
    }
}

/// Derive the repository base URL from the GitHub Actions environment
fn repo_url_from_env() -> Option<String> {
    let server = std::env::var("GITHUB_SERVER_URL").ok()?;
    let repo = std::env::var("GITHUB_REPOSITORY").ok()?;
    Some(format!("{}/{}", server, repo))
}
