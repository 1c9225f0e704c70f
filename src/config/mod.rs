//! Configuration system for linklint
//!
//! Layered YAML configuration with built-in defaults, a root config file in
//! the platform config directory, and environment overrides.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, ScanConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "scan.lookupTimeoutMs" => Ok(config.scan.lookup_timeout_ms.to_string()),
        "scan.maxConcurrentLookups" => Ok(config.scan.max_concurrent_lookups.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "scan.lookupTimeoutMs" => {
            config.scan.lookup_timeout_ms = value
                .parse()
                .context("scan.lookupTimeoutMs must be a number of milliseconds")?;
        }
        "scan.maxConcurrentLookups" => {
            config.scan.max_concurrent_lookups = value
                .parse()
                .context("scan.maxConcurrentLookups must be a positive integer")?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut config = Config::default();
        set_config_value(&mut config, "scan.lookupTimeoutMs", "1200").unwrap();
        assert_eq!(
            get_config_value(&config, "scan.lookupTimeoutMs").unwrap(),
            "1200"
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(get_config_value(&config, "ui.skin").is_err());
        assert!(set_config_value(&mut config, "ui.skin", "nord").is_err());
    }
}
