//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the environment is not configured, falls back to a config file
//! 3. Probes multiple paths for config files
//! 4. If no file exists, built-in defaults apply
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `STAFFHUB_BASE_URL`: Data service base URL (presence selects env config)
//! - `STAFFHUB_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `STAFFHUB_MAX_ATTEMPTS`: Attempts per request including the first
//! - `STAFFHUB_CACHE_TTL_MS`: Read cache TTL in milliseconds
//! - `STAFFHUB_CACHE_MAX_ENTRIES`: Read cache capacity
//! - `STAFFHUB_LOG_LEVEL`: Log filter directive (e.g. "info")
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./staffhub.json` or `./staffhub.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use staffhub_domain::{AppConfig, Result, StaffHubError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the environment is
/// not configured, falls back to a config file; if no file exists either,
/// the built-in defaults are used.
///
/// # Errors
/// Returns `StaffHubError::Config` if a present source is malformed or
/// fails validation.
pub fn load() -> Result<AppConfig> {
    if let Some(config) = load_from_env()? {
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using defaults");
            let config = AppConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Load configuration from environment variables
///
/// `STAFFHUB_BASE_URL` selects environment-based configuration; when it is
/// absent, `Ok(None)` is returned and the caller should fall back to a
/// file. All other variables are optional and default when unset.
///
/// # Errors
/// Returns `StaffHubError::Config` if a variable has an invalid value or
/// the resulting configuration fails validation.
pub fn load_from_env() -> Result<Option<AppConfig>> {
    let Ok(base_url) = std::env::var("STAFFHUB_BASE_URL") else {
        return Ok(None);
    };

    let mut config = AppConfig::default();
    config.data_service.base_url = base_url;

    if let Some(timeout) = env_parse::<u64>("STAFFHUB_TIMEOUT_SECS")? {
        config.data_service.timeout_secs = timeout;
    }
    if let Some(attempts) = env_parse::<u32>("STAFFHUB_MAX_ATTEMPTS")? {
        config.data_service.max_attempts = attempts;
    }
    if let Some(ttl_ms) = env_parse::<u64>("STAFFHUB_CACHE_TTL_MS")? {
        config.cache.ttl_ms = ttl_ms;
    }
    if let Some(max_entries) = env_parse::<usize>("STAFFHUB_CACHE_MAX_ENTRIES")? {
        config.cache.max_entries = max_entries;
    }
    if let Ok(level) = std::env::var("STAFFHUB_LOG_LEVEL") {
        config.log_level = level;
    }

    config.validate()?;
    Ok(Some(config))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Fields omitted in the file fall back to their defaults.
///
/// # Errors
/// Returns `StaffHubError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(StaffHubError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            StaffHubError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| StaffHubError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| StaffHubError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| StaffHubError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(StaffHubError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, up to two parent levels, and
/// the executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("staffhub.json"),
            cwd.join("staffhub.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("staffhub.json"),
                exe_dir.join("staffhub.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `StaffHubError::Config` when the variable is set but does not
/// parse as the expected type.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| StaffHubError::Config(format!("Invalid value for {}: {}", key, raw))),
        Err(_) => Ok(None),
    }
}
