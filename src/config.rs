//! Configuration for the analytics engine
//!
//! Policy defaults (target percentile, bucket count, minimum group size)
//! are data, not code: they live here with TOML file support and
//! environment variable overrides, and callers pass them into the engine
//! operations explicitly.

use serde::{Deserialize, Serialize};

/// Analytics policy configuration
///
/// # Example
///
/// ```rust
/// use zarplata::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::default();
/// assert_eq!(config.default_percentile, 90.0);
/// assert_eq!(config.min_group_size, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Target percentile for summary statistics when the caller does not
    /// specify one (0-100)
    #[serde(default = "default_percentile")]
    pub default_percentile: f64,

    /// Number of equal-width buckets for distribution queries
    #[serde(default = "default_bucket_count")]
    pub default_bucket_count: usize,

    /// Minimum record count for a role group to be surfaced by ranked
    /// group-by queries (statistical-significance floor)
    #[serde(default = "default_min_group_size")]
    pub min_group_size: u64,

    /// Upper bound on the number of periods a time-series query may request
    #[serde(default = "default_max_periods")]
    pub max_periods: usize,
}

// Default value functions
fn default_percentile() -> f64 {
    90.0
}
fn default_bucket_count() -> usize {
    10
}
fn default_min_group_size() -> u64 {
    10
}
fn default_max_periods() -> usize {
    120
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_percentile: default_percentile(),
            default_bucket_count: default_bucket_count(),
            min_group_size: default_min_group_size(),
            max_periods: default_max_periods(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;

        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file {}: {}", path, e))
    }

    /// Load configuration with environment variable overrides applied
    pub fn from_file_with_env(path: &str) -> Result<Self, String> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from environment variables only, on top of defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply `ZARPLATA_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(p) = std::env::var("ZARPLATA_DEFAULT_PERCENTILE") {
            if let Ok(v) = p.parse() {
                self.default_percentile = v;
            }
        }
        if let Ok(b) = std::env::var("ZARPLATA_BUCKET_COUNT") {
            if let Ok(v) = b.parse() {
                self.default_bucket_count = v;
            }
        }
        if let Ok(m) = std::env::var("ZARPLATA_MIN_GROUP_SIZE") {
            if let Ok(v) = m.parse() {
                self.min_group_size = v;
            }
        }
        if let Ok(m) = std::env::var("ZARPLATA_MAX_PERIODS") {
            if let Ok(v) = m.parse() {
                self.max_periods = v;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.default_percentile) {
            return Err(format!(
                "Default percentile {} is outside [0, 100]",
                self.default_percentile
            ));
        }
        if self.default_bucket_count == 0 {
            return Err("Bucket count must be > 0".to_string());
        }
        if self.max_periods == 0 {
            return Err("Max periods must be > 0".to_string());
        }
        Ok(())
    }
}
