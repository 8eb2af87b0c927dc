//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.evenup/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ledger::{Friend, seed_friends};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EvenUpConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub friends: Vec<Friend>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub debounce_ms: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_CURRENCY: &str = "€";
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub debounce_ms: u64,
    pub currency: String,
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,
    pub friends: Vec<Friend>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateFriend(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::DuplicateFriend(id) => write!(f, "duplicate friend id in config: {id}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.evenup/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".evenup").join("config.toml"))
}

/// Load config from `~/.evenup/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EvenUpConfig::default()`.
pub fn load_config() -> Result<EvenUpConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EvenUpConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EvenUpConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Parses TOML and checks that seeded friend ids are unique.
pub fn parse_config(contents: &str) -> Result<EvenUpConfig, ConfigError> {
    let config: EvenUpConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;

    let mut seen = std::collections::HashSet::new();
    for friend in &config.friends {
        if !seen.insert(friend.id.as_str()) {
            return Err(ConfigError::DuplicateFriend(friend.id.clone()));
        }
    }
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# EvenUp Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# debounce_ms = 300                  # quiet period before a movie search fires
# currency = "€"

# [tmdb]
# api_key = "..."                    # Or set TMDB_API_KEY env var
# base_url = "https://api.themoviedb.org/3"
# image_base_url = "https://image.tmdb.org/t/p/w500"

# Friends listed here replace the built-in ones.
# [[friends]]
# id = "118836"
# name = "Clark"
# image = "https://i.pravatar.cc/48?u=118836"
# balance = -7
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_debounce_ms` is from the CLI flag (None = not specified).
pub fn resolve(config: &EvenUpConfig, cli_debounce_ms: Option<u64>) -> ResolvedConfig {
    // Debounce: CLI → env → config → default
    let debounce_ms = cli_debounce_ms
        .or_else(|| {
            std::env::var("EVENUP_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.debounce_ms)
        .unwrap_or(DEFAULT_DEBOUNCE_MS);

    let tmdb_api_key = std::env::var("TMDB_API_KEY")
        .ok()
        .or_else(|| config.tmdb.api_key.clone());

    let tmdb_base_url = std::env::var("TMDB_BASE_URL")
        .ok()
        .or_else(|| config.tmdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());

    let tmdb_image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
        .ok()
        .or_else(|| config.tmdb.image_base_url.clone())
        .unwrap_or_else(|| DEFAULT_TMDB_IMAGE_BASE_URL.to_string());

    let friends = if config.friends.is_empty() {
        seed_friends()
    } else {
        config.friends.clone()
    };

    ResolvedConfig {
        debounce_ms,
        currency: config
            .general
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        tmdb_api_key,
        tmdb_base_url,
        tmdb_image_base_url,
        friends,
    }
}
