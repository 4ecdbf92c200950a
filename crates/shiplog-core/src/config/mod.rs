//! Configuration management

mod defaults;
mod loader;
mod types;
mod validation;

pub use defaults::config_file_names;
pub use loader::{find_config, load_config, load_config_from_dir, load_config_or_default};
pub use types::{BranchRulesConfig, ChangelogConfig, Config, GitConfig, ManifestConfig};
pub use validation::validate_config;
