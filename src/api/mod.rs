//! HTTP API
//!
//! A small axum application over the shared ledger:
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/` | static index page |
//! | GET | `/api/transactions` | all expenses and incomes |
//! | POST | `/api/transactions` | record one expense or income |
//! | GET | `/api/summary` | overall totals |
//!
//! The API paths match by prefix: `GET /api/summary/` or
//! `POST /api/transactions/anything` reach the same handlers. Anything else
//! answers `404 Not Found` in plain text. Every response carries
//! `Access-Control-Allow-Origin: *`.

pub mod dto;
pub mod error;
mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerSettings;
use crate::error::{TrackerError, TrackerResult};
use crate::services::Ledger;

pub use error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
    pub index_file: PathBuf,
}

impl AppState {
    pub fn new(ledger: Arc<Ledger>, index_file: impl Into<PathBuf>) -> Self {
        Self {
            ledger,
            index_file: index_file.into(),
        }
    }
}

/// Build the application router with its middleware stack
///
/// The request timeout covers the whole request. A POST that times out after
/// its append has started may still be recorded even though the client sees
/// `408 Request Timeout`.
pub fn router(state: AppState, settings: &ServerSettings) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::serve_index).fallback(handlers::not_found),
        )
        .route(
            "/api/transactions",
            get(handlers::list_transactions)
                .post(handlers::create_transaction)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/summary",
            get(handlers::summary).fallback(handlers::not_found),
        )
        .fallback(handlers::route_by_prefix)
        .with_state(state)
        .layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .layer(TimeoutLayer::new(settings.request_timeout()))
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured listen address
pub async fn bind(settings: &ServerSettings) -> TrackerResult<TcpListener> {
    let addr = settings.listen_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| TrackerError::Server(format!("Failed to bind {}: {}", addr, e)))
}

/// Serve until Ctrl-C
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    settings: &ServerSettings,
) -> TrackerResult<()> {
    let addr = listener.local_addr()?;
    let app = router(state, settings);

    tracing::info!(%addr, "Expense tracker listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TrackerError::Server(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
