//! Serve command - HTTP front end for on-demand exports

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sfx2tf_export::Exporter;
use sfx2tf_hcl::Document;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::commands::Command;
use crate::error::{CliError, CliResult};
use crate::output;

/// Load balancer health checks get an empty answer on `/`
const HEALTH_CHECKER: &str = "ELB-HealthChecker/2.0";

const USAGE: &str = "sfx2tf: export SignalFx resources as Terraform configuration

  GET /dashboard/{id}   dashboard and its charts
  GET /detector/{id}    detector (v2 or legacy v1)
  GET /api/metrics      liveness
";

/// Build the HTTP routes over an exporter
pub fn router(exporter: Arc<Exporter>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/dashboard/{id}", get(dashboard))
        .route("/detector/{id}", get(detector))
        .route("/api/metrics", get(metrics))
        .with_state(exporter)
}

fn plain(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

fn header_text<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

fn log_request(headers: &HeaderMap, resource: &str, id: &str) {
    info!(
        "Request for {} {} from <{}> with user agent <{}>",
        resource,
        id,
        header_text(headers, header::HeaderName::from_static("x-forwarded-for")),
        header_text(headers, header::USER_AGENT)
    );
}

fn respond(result: sfx2tf_export::Result<Document>) -> Response {
    let rendered = result
        .map_err(CliError::from)
        .and_then(|document| document.render().map_err(CliError::from));

    match rendered {
        Ok(text) => plain(StatusCode::OK, text),
        Err(err) => {
            warn!("Export failed: {}", err);
            plain(StatusCode::INTERNAL_SERVER_ERROR, format!("{}\n", err))
        }
    }
}

async fn root(headers: HeaderMap) -> Response {
    if header_text(&headers, header::USER_AGENT) == HEALTH_CHECKER {
        return StatusCode::OK.into_response();
    }
    plain(StatusCode::OK, USAGE.to_string())
}

async fn dashboard(
    State(exporter): State<Arc<Exporter>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    log_request(&headers, "dashboard", &id);
    respond(exporter.export_dashboard(&id).await)
}

async fn detector(
    State(exporter): State<Arc<Exporter>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    log_request(&headers, "detector", &id);
    respond(exporter.export_detector(&id).await)
}

async fn metrics() -> Response {
    plain(StatusCode::OK, "up 1".to_string())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

/// Serve command handler
pub struct ServeCommand {
    exporter: Arc<Exporter>,
    address: String,
    port: u16,
}

impl ServeCommand {
    pub fn new(exporter: Exporter, address: impl Into<String>, port: u16) -> Self {
        Self {
            exporter: Arc::new(exporter),
            address: address.into(),
            port,
        }
    }

    /// `address:port` the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> CliResult<()> {
        let bind = self.bind_address();
        let listener = TcpListener::bind(&bind)
            .await
            .map_err(|e| CliError::Server(format!("cannot bind to {}: {}", bind, e)))?;

        output::print_info(&format!("Starting server on {}", bind));
        info!("Listening on {}", bind);

        axum::serve(listener, router(self.exporter.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}
