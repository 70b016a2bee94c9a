//! Application configuration
//!
//! Plain data types shared across the workspace. Loading from the
//! environment and config files lives in the infra crate.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_MS};
use crate::errors::{Result, StaffHubError};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub data_service: DataServiceConfig,
    pub cache: CacheSettings,
    /// Log filter directive, e.g. "info" or "staffhub_core=debug".
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_service: DataServiceConfig::default(),
            cache: CacheSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `StaffHubError::Config` if any value is out of range.
    pub fn validate(&self) -> Result<()> {
        self.data_service.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}

/// Connection settings for the remote data service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataServiceConfig {
    pub base_url: String,

    /// Per-request timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// Total attempts per request including the first (default: 3)
    pub max_attempts: u32,
}

impl Default for DataServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            max_attempts: 3,
        }
    }
}

impl DataServiceConfig {
    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(StaffHubError::Config("base_url cannot be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(StaffHubError::Config("timeout_secs must be greater than 0".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(StaffHubError::Config("max_attempts must be greater than 0".to_string()));
        }
        Ok(())
    }
}

/// Read-cache tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CacheSettings {
    /// Entry time-to-live in milliseconds (default: 30000)
    pub ttl_ms: u64,

    /// Maximum entries before eviction (default: 256)
    pub max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_ms: DEFAULT_CACHE_TTL_MS, max_entries: DEFAULT_CACHE_MAX_ENTRIES }
    }
}

impl CacheSettings {
    fn validate(&self) -> Result<()> {
        if self.ttl_ms == 0 {
            return Err(StaffHubError::Config("cache ttl_ms must be greater than 0".to_string()));
        }
        if self.max_entries == 0 {
            return Err(StaffHubError::Config(
                "cache max_entries must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
