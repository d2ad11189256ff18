use std::sync::OnceLock;

use super::loader::load_config;
use super::FixtureConfig;

/// Cache the configuration
static CONFIG: OnceLock<FixtureConfig> = OnceLock::new();

/// Get the cached configuration
pub fn get_config() -> &'static FixtureConfig {
    CONFIG.get_or_init(load_config)
}
