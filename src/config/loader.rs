use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::{FixtureConfig, CONFIG_PATH_ENV, INDENT_SIZE_ENV, RUNTIME_DIR_ENV, USE_TABS_ENV};
use crate::errors::{FixtureError, Result};

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<FixtureConfig> {
    let config = toml::from_str::<FixtureConfig>(contents)
        .map_err(|e| FixtureError::configuration(format!("Failed to parse config: {}", e)))?;
    config
        .formatting
        .validate()
        .map_err(FixtureError::configuration)?;
    Ok(config)
}

/// Try loading config from a specific path, falling back to `None` on any failure
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FixtureConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            );
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Apply environment overrides on top of `config`.
///
/// `lookup` abstracts the environment so the override rules stay testable.
pub fn apply_env_overrides(
    config: FixtureConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> FixtureConfig {
    let mut config = config;

    if let Some(dir) = lookup(RUNTIME_DIR_ENV).filter(|v| !v.trim().is_empty()) {
        config.runtime_directory = Some(PathBuf::from(dir));
    }

    if let Some(raw) = lookup(INDENT_SIZE_ENV) {
        match raw.trim().parse::<usize>() {
            Ok(size) => {
                let candidate = config.formatting.clone().with_indent_size(size);
                match candidate.validate() {
                    Ok(()) => config.formatting = candidate,
                    Err(e) => log::warn!("Ignoring {}: {}", INDENT_SIZE_ENV, e),
                }
            }
            Err(_) => log::warn!("Ignoring {}: '{}' is not a number", INDENT_SIZE_ENV, raw),
        }
    }

    if let Some(raw) = lookup(USE_TABS_ENV) {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.formatting.use_tabs = true,
            "0" | "false" | "no" => config.formatting.use_tabs = false,
            _ => log::warn!("Ignoring {}: '{}' is not a boolean", USE_TABS_ENV, raw),
        }
    }

    config
}

/// Load configuration from the file named by `ANALYZER_FIXTURES_CONFIG` and the environment.
pub fn load_config() -> FixtureConfig {
    let from_file = std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|path| !path.trim().is_empty())
        .and_then(|path| try_load_config_from_path(Path::new(&path)))
        .unwrap_or_else(|| {
            log::debug!("No fixture config file configured. Using default config.");
            FixtureConfig::default()
        });

    apply_env_overrides(from_file, |key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::NewlineStyle;
    use indoc::indoc;
    use std::collections::HashMap;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            runtime_directory = "/opt/runtime"

            [formatting]
            indent_size = 2
            use_tabs = false
            newline = "crlf"
        "#})
        .unwrap();

        assert_eq!(config.runtime_directory, Some(PathBuf::from("/opt/runtime")));
        assert_eq!(config.formatting.indent_size, 2);
        assert_eq!(config.formatting.newline, NewlineStyle::Crlf);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        assert_eq!(parse_and_validate_config("").unwrap(), FixtureConfig::default());
    }

    #[test]
    fn test_parse_rejects_invalid_indent() {
        let err = parse_and_validate_config("[formatting]\nindent_size = 0\n").unwrap_err();
        assert!(matches!(err, FixtureError::Configuration(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_and_validate_config("colour = true\n").is_err());
    }

    #[test]
    fn test_try_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.toml");
        std::fs::write(&path, "[formatting]\nuse_tabs = true\n").unwrap();

        let config = try_load_config_from_path(&path).unwrap();
        assert!(config.formatting.use_tabs);
        assert!(try_load_config_from_path(&dir.path().join("missing.toml")).is_none());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (RUNTIME_DIR_ENV, "/custom/rt"),
            (INDENT_SIZE_ENV, "8"),
            (USE_TABS_ENV, "yes"),
        ]
        .into_iter()
        .collect();

        let config = apply_env_overrides(FixtureConfig::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });

        assert_eq!(config.runtime_directory, Some(PathBuf::from("/custom/rt")));
        assert_eq!(config.formatting.indent_size, 8);
        assert!(config.formatting.use_tabs);
    }

    #[test]
    fn test_invalid_env_overrides_are_ignored() {
        let config = apply_env_overrides(FixtureConfig::default(), |key| match key {
            INDENT_SIZE_ENV => Some("wide".to_string()),
            USE_TABS_ENV => Some("maybe".to_string()),
            RUNTIME_DIR_ENV => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config, FixtureConfig::default());
    }
}
