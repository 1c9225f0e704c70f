//! Configuration loading and merging logic
//!
//! Handles loading configuration from file and environment overrides
//! according to precedence rules.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{paths, schema::Config};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let mut config = Self::load_defaults();

        if let Ok(file_config) = Self::load_file(&paths::root_config_path()) {
            config = file_config;
        }

        Ok(Self::apply_env_overrides(config))
    }

    /// Built-in defaults
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Load configuration from a file
    pub fn load_file(path: &PathBuf) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Persist configuration to the root config file
    pub fn save_root(config: &Config) -> Result<()> {
        let path = paths::root_config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }

        let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
        std::fs::write(&path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(value) = std::env::var("LINKLINT_LOOKUP_TIMEOUT_MS") {
            match value.parse() {
                Ok(ms) => config.scan.lookup_timeout_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid LINKLINT_LOOKUP_TIMEOUT_MS: {}", value),
            }
        }
        if let Ok(value) = std::env::var("LINKLINT_MAX_CONCURRENT_LOOKUPS") {
            match value.parse() {
                Ok(n) => config.scan.max_concurrent_lookups = n,
                Err(_) => {
                    tracing::warn!("Ignoring invalid LINKLINT_MAX_CONCURRENT_LOOKUPS: {}", value)
                }
            }
        }
        config
    }
}
