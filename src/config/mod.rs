mod schema;

pub use schema::{Config, PeriodConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::{validate_period, validate_scoring};

/// Get the config directory path (~/.config/score-lattes/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("score-lattes"))
}

/// Get the default config file path (~/.config/score-lattes/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/score-lattes/config.yaml) and falls back to the built-in
///   rubric when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(default) if default.exists() => default,
            _ => {
                tracing::debug!("no config file, using built-in rubric");
                return Ok(Config::default());
            }
        },
    };

    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config = parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Parse config YAML. An empty document yields the defaults.
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_saphyr::from_str(content)?)
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = validate_scoring(&config.scoring).err().unwrap_or_default();
    errors.extend(
        validate_period(config.period.since, config.period.until)
            .err()
            .unwrap_or_default(),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
