//! Configuration types

use serde::{Deserialize, Serialize};

/// Default SignalFx API endpoint
pub const DEFAULT_API_URL: &str = "https://api.eu0.signalfx.com";

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// SignalFx API access
    pub api: ApiConfig,
    /// Generated document settings
    pub export: ExportConfig,
    /// `serve` front end
    pub server: ServerConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// SignalFx API access
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// API base URL for the realm
    pub url: String,
    /// Org access token
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for transient failures
    pub retry_count: u32,
}

/// Generated document settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    /// Provider namespace for resource types
    pub resource_prefix: String,
    /// Prepended to dashboard and detector names
    pub name_prefix: String,
}

/// `serve` front end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Bind port
    pub port: u16,
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: 30,
            retry_count: 3,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            resource_prefix: "signalfx".to_string(),
            name_prefix: String::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration from all sources
    fn load_config(&mut self) -> Result<AppConfig, crate::error::ConfigError>;
    /// Save configuration to the config file
    fn save_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
    /// Reject configurations that cannot work
    fn validate_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
}
