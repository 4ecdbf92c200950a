//! shiplog changelog - conventional-commit grouping and rendering
//!
//! The pipeline has four stages, each invoked once per run: collect raw
//! commits (PR diff range or squash body), group parsed subjects into a
//! two-level type/scope mapping, render the grouped data through a
//! handlebars template, and (release mode) prepend the result to the
//! persistent changelog file.

mod collector;
mod grouper;
mod parser;
mod renderer;
mod types;
mod writer;

pub use collector::{collect_pr, collect_squash, SquashCommit};
pub use grouper::group;
pub use parser::{is_noise, parse_subject};
pub use renderer::{resolve_title, ChangelogRenderer, RenderContext, SquashContext};
pub use types::{CommitEntry, GroupedCommits, ParsedSubject, FALLBACK_TYPE, NO_SCOPE};
pub use writer::prepend_section;
