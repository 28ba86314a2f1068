//! Configuration loading.
//!
//! The config file is resolved in priority order:
//! 1. `--config` command-line argument
//! 2. `PORTFOLIO_CONFIG` environment variable
//! 3. `portfolio.toml` in the working directory
//! 4. Built-in defaults
//!
//! Individual CLI flags override values from whichever file was used.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::content::ContentSource;
use crate::error::{Error, Result};

pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// File path or http(s) URL of the content JSON
    pub source: String,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: "data/content.json".to_string(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Preference file used by the CLI
    pub path: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".portfolio_prefs.json"),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Resolve the config file following the priority order above. An
    /// explicitly named file (flag or env var) must exist.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            info!("Using config file {} (command line)", path.display());
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            info!("Using config file {} ({})", path, CONFIG_ENV);
            return Self::from_file(Path::new(&path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            info!("Using config file {}", local.display());
            return Self::from_file(local);
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.content.source.trim().is_empty() {
            return Err(Error::Config("content.source must not be empty".to_string()));
        }
        if self.server.host.trim().is_empty() {
            return Err(Error::Config("server.host must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn content_source(&self) -> ContentSource {
        ContentSource::parse(&self.content.source)
    }
}
