//! Configuration loader
//!
//! Loads application configuration from a config file and the process
//! environment.
//!
//! ## Loading Strategy
//! 1. Starts from built-in defaults
//! 2. Merges a config file when one is found (probed paths below)
//! 3. Environment variables override both
//!
//! ## Environment Variables
//! - `SHIFTCLOCK_DATABASE_URL` (or `DATABASE_URL`): PostgreSQL connection
//!   string; absent means in-memory storage
//! - `SHIFTCLOCK_DB_CONNECT_TIMEOUT`: startup probe timeout in seconds
//! - `SHIFTCLOCK_HOST`: bind address
//! - `SHIFTCLOCK_PORT`: bind port
//! - `SHIFTCLOCK_SEED_ENABLED`: whether startup seeding runs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./shiftclock.toml` or `./shiftclock.json`
//! 2. `./config.toml` or `./config.json`
//! 3. `../shiftclock.toml` or `../shiftclock.json`

use std::path::{Path, PathBuf};

use shiftclock_domain::{Config, Result, ShiftClockError};

/// Load configuration: defaults, then file (if found), then environment.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration from file");
            load_from_file(&path)?
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a specific file.
///
/// Supports both TOML and JSON formats (detected by file extension).
///
/// # Errors
/// Returns `ShiftClockError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ShiftClockError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| ShiftClockError::Config(format!("Invalid JSON config: {e}"))),
        _ => toml::from_str(contents)
            .map_err(|e| ShiftClockError::Config(format!("Invalid TOML config: {e}"))),
    }
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(url) = env_first(&["SHIFTCLOCK_DATABASE_URL", "DATABASE_URL"]) {
        config.database.url = Some(url);
    }
    if let Some(timeout) = env_first(&["SHIFTCLOCK_DB_CONNECT_TIMEOUT"]) {
        config.database.connect_timeout_seconds = timeout
            .parse()
            .map_err(|e| ShiftClockError::Config(format!("Invalid connect timeout: {e}")))?;
    }
    if let Some(host) = env_first(&["SHIFTCLOCK_HOST"]) {
        config.server.host = host;
    }
    if let Some(port) = env_first(&["SHIFTCLOCK_PORT"]) {
        config.server.port =
            port.parse().map_err(|e| ShiftClockError::Config(format!("Invalid port: {e}")))?;
    }
    if let Some(enabled) = env_first(&["SHIFTCLOCK_SEED_ENABLED"]) {
        config.seed.enabled = matches!(enabled.as_str(), "true" | "1" | "yes");
    }
    Ok(())
}

fn env_first(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| std::env::var(name).ok()).filter(|value| !value.is_empty())
}

fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: &[&str] = &[
        "shiftclock.toml",
        "shiftclock.json",
        "config.toml",
        "config.json",
        "../shiftclock.toml",
        "../shiftclock.json",
    ];

    CANDIDATES.iter().map(PathBuf::from).find(|path| path.exists())
}
