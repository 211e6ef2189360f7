//! reqwest-backed client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Response,
};
use tracing::{debug, trace};
use url::Url;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
    middleware::RetryMiddleware,
};

/// Longest error body kept in [`HttpError::HttpStatus`]
const MAX_ERROR_BODY: usize = 512;

/// Read-only access to a JSON API
///
/// Only non-2xx answers and transport failures become errors; the body of a
/// successful response is left for the caller to decode.
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    async fn get(&self, url: &str) -> Result<Response>;
}

pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
    retry: RetryMiddleware,
}

impl HttpClient {
    pub fn new(config: HttpConfig) -> Result<Self> {
        let inner = build_reqwest(&config)?;
        let retry = RetryMiddleware::new(config.retry);
        Ok(Self {
            inner,
            config,
            retry,
        })
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    async fn fetch_once(&self, url: &Url) -> Result<Response> {
        trace!("GET {}", url);
        let response = self.inner.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout(self.config.timeout)
            } else {
                HttpError::RequestFailed(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut message = response.text().await.unwrap_or_default();
        truncate_at_char(&mut message, MAX_ERROR_BODY);
        Err(HttpError::HttpStatus { status, message })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get(&self, url: &str) -> Result<Response> {
        let url = Url::parse(url).map_err(|e| HttpError::InvalidUrl(format!("{}: {}", url, e)))?;
        debug!("Fetching {}", url);
        self.retry.execute(|| self.fetch_once(&url)).await
    }
}

/// Build a client and erase its type for sharing across tasks
pub fn shared_client(config: HttpConfig) -> Result<Arc<dyn HttpClientTrait>> {
    Ok(Arc::new(HttpClient::new(config)?))
}

fn build_reqwest(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .default_headers(sensitive_headers(config)?);

    if let Some(proxy) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy.as_str())
            .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| HttpError::BuildError(e.to_string()))
}

fn sensitive_headers(config: &HttpConfig) -> Result<HeaderMap> {
    config
        .headers
        .iter()
        .map(|(name, value)| {
            let invalid = |message: String| HttpError::InvalidHeader {
                name: name.clone(),
                message,
            };
            let key = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let mut value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            value.set_sensitive(true);
            Ok((key, value))
        })
        .collect()
}

fn truncate_at_char(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}
