//! Configuration resolution for moviweb
//!
//! Two-tier resolution with ENV > TOML priority. Every value has a default
//! except the OMDb API key, which stays absent until configured; enrichment
//! attempts fail explicitly without it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_DB_PATH: &str = "data/movies.db";
const DEFAULT_CONFIG_PATH: &str = "moviweb.toml";

/// Partial configuration as read from one source (TOML file or environment)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub omdb_api_key: Option<String>,
    pub secret: Option<String>,
    pub database: Option<PathBuf>,
    pub bind: Option<String>,
}

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OMDb API key; None leaves title lookup reporting not-found
    pub omdb_api_key: Option<String>,
    /// Shared secret for API routes; empty disables auth checking
    pub secret: String,
    /// SQLite database path
    pub database: PathBuf,
    /// Listen address, e.g. "127.0.0.1:5000"
    pub bind: String,
}

impl Config {
    /// Load configuration from environment variables and the optional TOML
    /// file at MOVIWEB_CONFIG (default ./moviweb.toml)
    pub fn load() -> Result<Self> {
        let toml_path = std::env::var_os("MOVIWEB_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let toml_config = read_toml_config(&toml_path)?;
        Ok(Self::resolve(env_config(), toml_config))
    }

    /// Merge the two sources; environment wins over TOML
    fn resolve(env: TomlConfig, toml: TomlConfig) -> Self {
        let env_key = env.omdb_api_key.filter(|k| is_valid_key(k));
        let toml_key = toml.omdb_api_key.filter(|k| is_valid_key(k));

        if env_key.is_some() && toml_key.is_some() {
            warn!(
                "OMDb API key found in both environment and TOML. \
                 Using environment (highest priority)."
            );
        }

        Self {
            omdb_api_key: env_key.or(toml_key),
            secret: env.secret.or(toml.secret).unwrap_or_default(),
            database: env
                .database
                .or(toml.database)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            bind: env
                .bind
                .or(toml.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
        }
    }
}

/// Read the environment tier
fn env_config() -> TomlConfig {
    TomlConfig {
        omdb_api_key: std::env::var("MOVIWEB_OMDB_API_KEY").ok(),
        secret: std::env::var("MOVIWEB_SECRET").ok(),
        database: std::env::var_os("MOVIWEB_DB").map(PathBuf::from),
        bind: std::env::var("MOVIWEB_BIND").ok(),
    }
}

/// Read the TOML tier; a missing file is not an error
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        return Ok(TomlConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
