//! HTTP layer: routing table, shared state and server loop.

mod error;
pub mod handlers;

pub use error::ApiError;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::store::SqliteStore;

/// State cloned into every handler. Holds no per-request data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SqliteStore,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }
}

/// Static routes are matched before the `:start` parameter, so
/// `/api/v1.0/stations` never reaches the temperature handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/v1.0/precipitation", get(handlers::precipitation))
        .route("/api/v1.0/stations", get(handlers::stations))
        .route("/api/v1.0/tobs", get(handlers::tobs))
        .route("/api/v1.0/:start", get(handlers::temps_from))
        .route("/api/v1.0/:start/:end", get(handlers::temps_between))
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
