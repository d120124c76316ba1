use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use wa_core::Result;

pub mod error;
pub mod handlers;
pub mod sort;

pub use error::ApiError;

pub const DEFAULT_PORT: u16 = 5000;

pub fn create_app() -> Router {
    Router::new()
        .route("/api/quick_sort", post(handlers::quick_sort))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Quick sort API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app()).await?;
    Ok(())
}

pub mod prelude {
    pub use super::sort::{quick_sort, quick_sort_by, sort_numbers};
    pub use super::{create_app, serve, ApiError};
}
