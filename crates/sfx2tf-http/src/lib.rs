//! Outbound HTTP for sfx2tf
//!
//! A thin layer over reqwest: default headers (the API token among them) are
//! attached to every request, non-2xx answers turn into [`HttpError`], and
//! GETs that fail transiently are retried under a [`RetryPolicy`].
//! [`HttpClientTrait`] is the seam the API crate depends on.

pub mod client;
pub mod config;
pub mod error;
pub mod middleware;

pub use client::{shared_client, HttpClient, HttpClientTrait};
pub use config::HttpConfig;
pub use error::{HttpError, Result};
pub use middleware::{Backoff, RetryMiddleware, RetryPolicy};

pub use reqwest::{header, Response, StatusCode};
