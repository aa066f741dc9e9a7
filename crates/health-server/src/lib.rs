//! Health Records Server
//!
//! Axum service exposing the patient directory over HTTP. The binary in
//! `main.rs` parses [`ServerConfig`], installs logging and calls [`serve`].

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;

use std::any::Any;
use std::sync::Arc;

use axum::{response::IntoResponse, response::Response, Router};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;

use health_records::{HealthStore, MemStorage, PatientDirectory};

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub directory: PatientDirectory,
}

impl AppState {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            directory: PatientDirectory::new(store),
        }
    }
}

/// Full application router: routes plus request tracing and panic recovery
pub fn app(state: AppState) -> Router {
    with_middleware(api::routes(state))
}

/// Wrap `router` so every request is traced and panics become a 500
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// Bind, serve until ctrl-c, then drain
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let store = if config.no_seed {
        MemStorage::empty()
    } else {
        MemStorage::new()
    };
    info!(patients = store.patient_count().await, "directory initialized");

    let router = app(AppState::new(Arc::new(store)));
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("serving on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
