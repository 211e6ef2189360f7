//! sfx2tf configuration
//!
//! Settings come from `~/.config/sfx2tf/config.toml` (optional) overlaid by
//! `SFX2TF_<SECTION>__<KEY>` environment variables. Command-line flags are
//! applied on top by the binary.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{ConfigManager, ENV_PREFIX};
pub use types::{
    ApiConfig, AppConfig, ConfigManager as ConfigManagerTrait, ExportConfig, LoggingConfig,
    ServerConfig, DEFAULT_API_URL,
};
