pub mod process_points;

use axum::{response::IntoResponse, Json};

pub use process_points::process_points;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "geo-processor",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
