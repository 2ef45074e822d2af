//! Error types for db2jdl-config

use thiserror::Error;

/// Result type alias for db2jdl-config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can abort building the settings model
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A raw value does not name a legal member of a closed option set
    #[error("Invalid configuration: {key} = {value:?} (expected one of: {expected})")]
    InvalidConfiguration {
        key: &'static str,
        value: String,
        expected: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ConfigError(err.to_string())
    }
}
