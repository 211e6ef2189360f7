// Effective settings: config file and environment, overridden by flags

use std::{sync::Arc, time::Duration};

use sfx2tf_api::{SignalFxApi, SignalFxClient};
use sfx2tf_config::AppConfig;
use sfx2tf_export::{Exporter, ExportOptions};
use sfx2tf_http::HttpConfig;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Connection and export settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub retry_count: u32,
    pub resource_prefix: String,
    pub name_prefix: String,
}

impl ExportSettings {
    /// Start from loaded configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_url: config.api.url.clone(),
            token: config.api.token.clone(),
            timeout: Duration::from_secs(config.api.timeout_secs),
            retry_count: config.api.retry_count,
            resource_prefix: config.export.resource_prefix.clone(),
            name_prefix: config.export.name_prefix.clone(),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.token = Some(token);
        }
        self
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        self
    }

    pub fn with_name_prefix(mut self, name_prefix: Option<String>) -> Self {
        if let Some(name_prefix) = name_prefix {
            self.name_prefix = name_prefix;
        }
        self
    }

    /// Export options derived from these settings
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::default()
            .with_resource_prefix(self.resource_prefix.clone())
            .with_name_prefix(self.name_prefix.clone())
    }

    /// Build the HTTP-backed API client
    pub fn api_client(&self) -> CliResult<Arc<dyn SignalFxApi>> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(CliError::MissingToken)?;

        let http = HttpConfig::new()
            .with_timeout(self.timeout)
            .with_retry_count(self.retry_count);

        debug!("Using SignalFx API at {}", self.api_url);
        let client = SignalFxClient::new(&self.api_url, token, http)?;
        Ok(Arc::new(client))
    }

    /// Build an exporter talking to the SignalFx API
    pub fn exporter(&self) -> CliResult<Exporter> {
        Ok(Exporter::new(self.api_client()?, self.export_options()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = AppConfig::default();
        config.api.token = Some("from-config".to_string());
        config.export.name_prefix = "cfg-".to_string();

        let settings = ExportSettings::from_config(&config)
            .with_token(Some("from-flag".to_string()))
            .with_api_url(None)
            .with_name_prefix(Some("test-".to_string()));

        assert_eq!(settings.token.as_deref(), Some("from-flag"));
        assert_eq!(settings.api_url, config.api.url);
        assert_eq!(settings.name_prefix, "test-");
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_token_is_reported() {
        let settings = ExportSettings::from_config(&AppConfig::default());
        assert!(matches!(settings.api_client(), Err(CliError::MissingToken)));

        let blank = settings.with_token(Some("  ".to_string()));
        assert!(matches!(blank.exporter(), Err(CliError::MissingToken)));
    }

    #[test]
    fn test_bad_api_url_is_api_error() {
        let settings = ExportSettings::from_config(&AppConfig::default())
            .with_token(Some("abc".to_string()))
            .with_api_url(Some("not a url".to_string()));
        assert!(matches!(settings.api_client(), Err(CliError::Api(_))));
    }

    #[test]
    fn test_export_options_carry_prefixes() {
        let mut config = AppConfig::default();
        config.export.resource_prefix = "sfx".to_string();
        config.export.name_prefix = "copy-".to_string();
        let options = ExportSettings::from_config(&config).export_options();
        assert_eq!(options.display_name("CPU"), "copy-CPU");
    }
}
