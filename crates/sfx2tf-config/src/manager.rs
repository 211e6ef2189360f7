//! File plus environment configuration loading

use std::path::{Path, PathBuf};

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, ConfigManager as ConfigManagerTrait, LOG_LEVELS},
};

/// Environment variable prefix, e.g. `SFX2TF_API__TOKEN`
pub const ENV_PREFIX: &str = "SFX2TF";

/// Loads [`AppConfig`] from a TOML file overlaid with `SFX2TF_*` variables
pub struct ConfigManager {
    path: PathBuf,
    /// Set for paths given on the command line
    must_exist: bool,
    env_prefix: String,
}

impl ConfigManager {
    /// `<config dir>/sfx2tf/config.toml`, optional
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sfx2tf")
            .join("config.toml");
        Self::at(path, false)
    }

    /// A file that has to exist
    pub fn with_path(path: PathBuf) -> Self {
        Self::at(path, true)
    }

    fn at(path: PathBuf, must_exist: bool) -> Self {
        Self {
            path,
            must_exist,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    fn sources(&self) -> ConfigBuilder<DefaultState> {
        let env = Environment::with_prefix(&self.env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Config::builder()
            .add_source(File::from(self.path.as_path()).required(false))
            .add_source(env)
    }
}

/// First problem found in `config`, if any
fn first_problem(config: &AppConfig) -> Option<String> {
    if config.api.url.trim().is_empty() {
        return Some("API URL must not be empty".to_string());
    }
    if config.server.port == 0 {
        return Some("Server port must be greater than 0".to_string());
    }
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Some(format!(
            "Unknown log level '{}', expected one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
    None
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<AppConfig> {
        if self.must_exist && !self.path.is_file() {
            return Err(ConfigError::NotFound(self.path.display().to_string()));
        }
        debug!(
            "Reading {} with {}_* overrides",
            self.path.display(),
            self.env_prefix
        );
        Ok(self.sources().build()?.try_deserialize()?)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let rendered = toml::to_string_pretty(config)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, rendered)?;
        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        match first_problem(config) {
            Some(problem) => Err(ConfigError::Validation(problem)),
            None => Ok(()),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
