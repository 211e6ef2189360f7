//! SignalFx REST client

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use sfx2tf_http::{shared_client, HttpClientTrait, HttpConfig, HttpError};
use tracing::{debug, info};
use url::Url;

use crate::{
    error::{ApiError, Result},
    models::{Chart, Dashboard, Detector, DetectorRecord, DetectorSchema, DetectorV1},
};

/// Header carrying the org access token
pub const TOKEN_HEADER: &str = "X-SF-TOKEN";

/// Fetch operations the exporter needs
#[async_trait]
pub trait SignalFxApi: Send + Sync {
    /// Fetch a dashboard by id
    async fn dashboard(&self, id: &str) -> Result<Dashboard>;

    /// Fetch a chart by id
    async fn chart(&self, id: &str) -> Result<Chart>;

    /// Fetch a detector by id from whichever API generation holds it
    async fn detector(&self, id: &str) -> Result<DetectorRecord>;
}

/// HTTP implementation of [`SignalFxApi`]
pub struct SignalFxClient {
    http: Arc<dyn HttpClientTrait>,
    base_url: Url,
}

impl SignalFxClient {
    /// Create a client for `api_url` authenticating with `token`
    pub fn new(api_url: &str, token: &str, config: HttpConfig) -> Result<Self> {
        let http = shared_client(config.with_header(TOKEN_HEADER, token))?;
        Self::with_http(api_url, http)
    }

    /// Create a client over an existing HTTP client
    pub fn with_http(api_url: &str, http: Arc<dyn HttpClientTrait>) -> Result<Self> {
        let base_url = api_url
            .parse::<Url>()
            .map_err(|e| ApiError::Http(HttpError::InvalidUrl(e.to_string())))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(api_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// API base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, segments: &[&str]) -> Result<serde_json::Value> {
        let url = self.endpoint(segments)?;
        debug!("Fetching {}", url);
        let response = self.http.get(url.as_str()).await?;
        let body = response.json().await.map_err(HttpError::from)?;
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &'static str, id: &str) -> Result<T> {
        let body = self.get_json(&["v2", resource, id]).await?;
        decode(resource, id, body)
    }

    async fn legacy_detector(&self, id: &str) -> Result<DetectorRecord> {
        let body = self.get_json(&["v1", "detector", id]).await?;
        match DetectorSchema::sniff(&body) {
            Some(DetectorSchema::Legacy) => {
                let detector: DetectorV1 = decode("detector", id, body)?;
                Ok(DetectorRecord::Legacy(detector))
            }
            _ => Err(ApiError::UnrecognizedSchema { id: id.to_string() }),
        }
    }
}

fn decode<T: DeserializeOwned>(resource: &'static str, id: &str, body: serde_json::Value) -> Result<T> {
    serde_json::from_value(body).map_err(|source| ApiError::Decode {
        resource,
        id: id.to_string(),
        source,
    })
}

#[async_trait]
impl SignalFxApi for SignalFxClient {
    async fn dashboard(&self, id: &str) -> Result<Dashboard> {
        self.fetch("dashboard", id).await
    }

    async fn chart(&self, id: &str) -> Result<Chart> {
        self.fetch("chart", id).await
    }

    async fn detector(&self, id: &str) -> Result<DetectorRecord> {
        match self.get_json(&["v2", "detector", id]).await {
            Ok(body) => match DetectorSchema::sniff(&body) {
                Some(DetectorSchema::Current) => {
                    let detector: Detector = decode("detector", id, body)?;
                    Ok(DetectorRecord::Current(detector))
                }
                Some(DetectorSchema::Legacy) => {
                    let detector: DetectorV1 = decode("detector", id, body)?;
                    Ok(DetectorRecord::Legacy(detector))
                }
                None => Err(ApiError::UnrecognizedSchema { id: id.to_string() }),
            },
            Err(e) if e.is_not_found() => {
                info!("Detector {} unknown to the v2 API, trying the v1 API", id);
                self.legacy_detector(id).await
            }
            Err(e) => Err(e),
        }
    }
}
