//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Scan tuning
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    /// Per-lookup timeout in milliseconds
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Maximum main-component lookups in flight at once
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: default_lookup_timeout_ms(),
            max_concurrent_lookups: default_max_concurrent_lookups(),
        }
    }
}

fn default_lookup_timeout_ms() -> u64 {
    5000
}

fn default_max_concurrent_lookups() -> usize {
    4
}

impl ScanConfig {
    /// Audit options derived from this configuration
    pub fn audit_options(&self) -> crate::scan::AuditOptions {
        crate::scan::AuditOptions {
            lookup_timeout: std::time::Duration::from_millis(self.lookup_timeout_ms),
            max_concurrent_lookups: self.max_concurrent_lookups,
        }
    }
}
