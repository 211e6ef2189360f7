//! Client settings

use std::{collections::BTreeMap, time::Duration};

use crate::middleware::RetryPolicy;

/// Settings for [`HttpClient`](crate::HttpClient)
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Applies to GET requests only
    pub retry: RetryPolicy,
    /// Proxy for all schemes
    pub proxy: Option<String>,
    pub user_agent: String,
    /// Sent with every request; values are marked sensitive
    pub headers: BTreeMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
            proxy: None,
            user_agent: format!("sfx2tf/{}", env!("CARGO_PKG_VERSION")),
            headers: BTreeMap::new(),
        }
    }
}

impl HttpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Retries after the first GET attempt
    pub fn with_retry_count(mut self, retries: u32) -> Self {
        self.retry.retries = retries;
        self
    }

    /// Wait before the first retry; later waits grow from it
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry.backoff.first = delay;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry.retries, 3);
        assert!(config.headers.is_empty());
        assert!(config.user_agent.starts_with("sfx2tf/"));
    }

    #[test]
    fn test_retry_settings_land_in_policy() {
        let config = HttpConfig::new()
            .with_retry_count(5)
            .with_retry_delay(Duration::from_millis(20));
        assert_eq!(config.retry.retries, 5);
        assert_eq!(config.retry.backoff.first, Duration::from_millis(20));
        assert_eq!(config.retry.backoff.ceiling, Duration::from_secs(30));
    }

    #[test]
    fn test_headers_accumulate() {
        let config = HttpConfig::new()
            .with_header("X-SF-TOKEN", "one")
            .with_header("Accept", "application/json")
            .with_header("X-SF-TOKEN", "two");
        assert_eq!(config.headers.len(), 2);
        assert_eq!(config.headers["X-SF-TOKEN"], "two");
    }
}
