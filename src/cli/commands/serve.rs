//! HTTP front-end for the report pipeline.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/report?from=..&to=..&debug=..` | Report document (HTML) |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! A bad timestamp yields `400` with the body `Invalid date format`.
//! Everything else, including an empty document, is `200`.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{error, info};

use crate::cli::commands::pipeline;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{ReportError, Result};
use crate::core::models::report_request::ReportRequest;
use crate::core::services::report_service::ReportService;
use crate::core::traits::log_renderer::LogRenderer;
use crate::core::traits::log_source::LogSource;
use crate::core::traits::snapshot_store::SnapshotStore;

/// Shared state for route handlers.
///
/// The mutex makes requests run one at a time, which also keeps two debug
/// requests from racing to create the snapshot.
struct AppState<S: LogSource, R: LogRenderer, P: SnapshotStore> {
    service: Arc<Mutex<ReportService<S, R, P>>>,
}

impl<S: LogSource, R: LogRenderer, P: SnapshotStore> Clone for AppState<S, R, P> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Execute the `commit-report serve` command.
///
/// Blocks until the server stops. `bind` overrides `[server] bind`.
pub fn execute(config: &AppConfig, bind: Option<&str>) -> Result<()> {
    let bind_addr = bind.unwrap_or(&config.server.bind).to_string();
    let app = router(pipeline::build_service(config));

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ReportError::ServerFailed {
            reason: format!("Failed to start runtime: {e}"),
        })?;

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ReportError::ServerFailed {
                reason: format!("Failed to bind {bind_addr}: {e}"),
            })?;

        output::header("commit-report server");
        output::success(&format!("Listening on http://{bind_addr}/report"));
        info!(%bind_addr, "server started");

        axum::serve(listener, app)
            .await
            .map_err(|e| ReportError::ServerFailed {
                reason: e.to_string(),
            })
    })
}

/// Build the router around a report service.
pub fn router<S, R, P>(service: ReportService<S, R, P>) -> Router
where
    S: LogSource + 'static,
    R: LogRenderer + 'static,
    P: SnapshotStore + 'static,
{
    let state = AppState {
        service: Arc::new(Mutex::new(service)),
    };

    Router::new()
        .route("/report", get(handle_report::<S, R, P>))
        .route("/health", get(handle_health))
        .with_state(state)
}

async fn handle_report<S, R, P>(
    State(state): State<AppState<S, R, P>>,
    Query(request): Query<ReportRequest>,
) -> Response
where
    S: LogSource + 'static,
    R: LogRenderer + 'static,
    P: SnapshotStore + 'static,
{
    // The pipeline blocks on external processes.
    let result = tokio::task::spawn_blocking(move || {
        let service = state
            .service
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        service.generate(&request)
    })
    .await;

    match result {
        Ok(Ok(document)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            document,
        )
            .into_response(),
        Ok(Err(e @ ReportError::InvalidDateFormat)) => (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            e.to_string(),
        )
            .into_response(),
        Ok(Err(e)) => {
            error!(error = %e, "report failed");
            internal_error()
        }
        Err(e) => {
            error!(error = %e, "report task panicked");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Internal error",
    )
        .into_response()
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    version: &'static str,
}

async fn handle_health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
