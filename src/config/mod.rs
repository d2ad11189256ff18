//! Ambient configuration for fixture construction.
//!
//! Nothing here changes the meaning of a fixture; it only tunes how the host is
//! located and how formatted text is laid out. Values come from an optional TOML
//! file named by `ANALYZER_FIXTURES_CONFIG`, then from environment overrides.

mod accessors;
mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatting::FormattingOptions;

pub use accessors::get_config;
pub use loader::{apply_env_overrides, load_config, parse_and_validate_config};

/// Environment variable naming a TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "ANALYZER_FIXTURES_CONFIG";
/// Environment variable overriding the runtime library directory.
pub const RUNTIME_DIR_ENV: &str = "ANALYZER_FIXTURES_RUNTIME_DIR";
/// Environment variable overriding the formatter indent size.
pub const INDENT_SIZE_ENV: &str = "ANALYZER_FIXTURES_INDENT_SIZE";
/// Environment variable switching the formatter to tab indentation.
pub const USE_TABS_ENV: &str = "ANALYZER_FIXTURES_USE_TABS";

/// Process-level settings for the fixture pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    /// Directory holding the standard runtime libraries. When absent, the
    /// directory of the running executable is used.
    pub runtime_directory: Option<PathBuf>,
    pub formatting: FormattingOptions,
}
