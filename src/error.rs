//! Error types for the portfolio crate.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading a content file, preference file or config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content or preference JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote content fetch failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Config file is not valid TOML for `Config`
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown language code, tab id, or similar user-supplied value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
