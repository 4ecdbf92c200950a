//! Commit message generation command
//!
//! Derives a conventional commit subject from a branch name, e.g.
//! `feature/api-new-endpoint` becomes `feat(api): New endpoint`.

use clap::Args;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

use crate::cli::Cli;

/// Pattern: `type/scope-description` or `type/description`
static BRANCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/]+)/(?:([^-_]+)[-_])?(.+)$").expect("Invalid regex")
});

/// Subjects that already follow the conventional format
static CONVENTIONAL_SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(feat|fix|docs|style|refactor|perf|test|chore|ci)(\(.+\))?:").expect("Invalid regex")
});

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("Invalid regex"));

/// Derive a conventional commit message from a branch name
#[derive(Debug, Args)]
pub struct CommitMsgCommand {
    /// Branch name (a refs/heads/ prefix is accepted)
    pub branch: String,

    /// Pull request title; used verbatim when already conventional,
    /// otherwise as the description
    #[arg(long)]
    pub pr_title: Option<String>,
}

impl CommitMsgCommand {
    /// Execute the commit-msg command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!(branch = %self.branch, pr_title = ?self.pr_title, "executing commit-msg command");
        println!("{}", generate(&self.branch, self.pr_title.as_deref()));
        Ok(())
    }
}

/// Generate the conventional commit subject
fn generate(branch: &str, pr_title: Option<&str>) -> String {
    if let Some(title) = pr_title {
        if CONVENTIONAL_SUBJECT.is_match(title) {
            return title.to_string();
        }
    }

    let (commit_type, scope, derived) = parse_branch(branch);
    let description = pr_title.map(str::to_string).unwrap_or(derived);

    match scope {
        Some(scope) => format!("{}({}): {}", commit_type, scope, description),
        None => format!("{}: {}", commit_type, description),
    }
}

/// Split a branch name into commit type, scope and description
fn parse_branch(branch: &str) -> (&'static str, Option<String>, String) {
    let branch = branch.strip_prefix("refs/heads/").unwrap_or(branch);

    match BRANCH_REGEX.captures(branch) {
        Some(caps) => {
            let commit_type = map_branch_type(caps.get(1).map_or("", |m| m.as_str()));
            let scope = caps.get(2).map(|m| m.as_str().to_string());
            let description =
                normalize_description(caps.get(3).map_or("", |m| m.as_str()));
            (commit_type, scope, description)
        }
        None => ("feat", None, branch.to_string()),
    }
}

/// Map a branch prefix to a conventional commit type
fn map_branch_type(prefix: &str) -> &'static str {
    match prefix.to_lowercase().as_str() {
        "feature" | "feat" => "feat",
        "fix" | "hotfix" | "bugfix" | "patch" => "fix",
        "chore" => "chore",
        "docs" => "docs",
        "style" => "style",
        "refactor" => "refactor",
        "perf" => "perf",
        "test" => "test",
        "ci" => "ci",
        _ => "feat",
    }
}

/// Turn a kebab/snake-case fragment into a sentence-cased description
fn normalize_description(raw: &str) -> String {
    let spaced = SEPARATORS.replace_all(raw, " ");
    let spaced = spaced.trim();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
