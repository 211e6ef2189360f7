//! SignalFx REST API access for sfx2tf
//!
//! Typed read-only models for dashboards, charts and detectors, the
//! [`SignalFxApi`] fetch trait the exporter is written against, and
//! [`SignalFxClient`], its HTTP implementation.
//!
//! Detectors exist in two schema generations. [`SignalFxApi::detector`]
//! classifies the body it receives instead of treating any failure as a
//! hint: only a not-found answer from the v2 endpoint sends the client to
//! the v1 endpoint, and transient errors are reported as errors.

pub mod client;
pub mod error;
pub mod models;

pub use client::{SignalFxApi, SignalFxClient, TOKEN_HEADER};
pub use error::{ApiError, Result};
pub use models::*;
