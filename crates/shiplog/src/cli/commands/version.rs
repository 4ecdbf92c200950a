//! Version command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use shiplog_adapters::Manifest;
use shiplog_core::config::load_config_or_default;
use shiplog_git::GitRepo;
use shiplog_strategies::BranchRules;

use crate::cli::{output, Cli, OutputFormat};

/// Decide the next version from branch rules
#[derive(Debug, Args)]
pub struct VersionCommand {
    /// Branch the run is deciding for
    #[arg(long)]
    pub branch: String,

    /// Produce a prerelease (dev) version
    #[arg(long)]
    pub prerelease: bool,

    /// Manifest holding the current version (defaults to the configured path)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Decide without patching the manifest
    #[arg(long)]
    pub dry_run: bool,
}

impl VersionCommand {
    /// Execute the version command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(branch = %self.branch, prerelease = self.prerelease, dry_run = self.dry_run, "executing version command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let manifest_path = self
            .manifest
            .clone()
            .unwrap_or_else(|| config.manifest.path.clone());
        let manifest = Manifest::load(&cwd.join(&manifest_path))?;

        let rules = BranchRules::from_config(&config.branches)?;

        // Prerelease versions carry the commit count and head hash; release
        // decisions need neither.
        let (commit_count, build_sha) = if self.prerelease {
            let repo = GitRepo::discover(&cwd)?;
            let count = repo.rev_count()?;
            let sha = repo.head_commit_info().ok().map(|c| c.short_hash);
            (count, sha)
        } else {
            (0, None)
        };

        let decision = rules.next_version(
            &self.branch,
            self.prerelease,
            &manifest.version,
            commit_count,
            build_sha.as_deref(),
        )?;

        if decision.deploy && !self.dry_run {
            manifest.update_version(&decision.version)?;

            if !cli.quiet {
                eprintln!(
                    "{} Patched {} to {}",
                    style("✓").green().bold(),
                    style(manifest_path.display()).cyan(),
                    style(&decision.version).green().bold()
                );
            }
        }

        match cli.format {
            OutputFormat::Json => {
                let result = serde_json::json!({
                    "current": manifest.version,
                    "version": decision.version,
                    "deploy": decision.deploy,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Text => {
                output::emit_action_output("version", &decision.version)?;
                output::emit_action_output("deploy", &decision.deploy.to_string())?;
            }
        }

        Ok(())
    }
}
