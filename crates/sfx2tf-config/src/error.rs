//! Config loading and validation errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read or write config: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed file or an environment value of the wrong type
    #[error("Malformed config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Validation(String),

    /// Only raised for an explicitly requested file
    #[error("No config file at {0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(what) => ConfigError::NotFound(what),
            other => ConfigError::Parse(other.to_string()),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
