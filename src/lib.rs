pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::{health, process_points};

/// Build the service router. Shared by `main` and the integration tests.
pub fn app() -> Router {
    Router::new()
        .route("/process", post(process_points))
        .route("/health", get(health))
        .route("/api/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
