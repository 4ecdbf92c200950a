//! CLI commands

mod changelog;
mod commit_msg;
mod completions;
mod version;

pub use changelog::ChangelogCommand;
pub use commit_msg::CommitMsgCommand;
pub use completions::CompletionsCommand;
pub use version::VersionCommand;
