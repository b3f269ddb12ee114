use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    libraries::{aggregate::summarize, payload_check::check_payload},
    models::{ErrorBody, ProcessResponse},
};

/// Handle centroid and bounding box computation for a batch of points
///
/// Every failure, from an undecodable body to a single out-of-range
/// coordinate, produces the same 400 shape; the aggregator only ever sees a
/// validated non-empty list.
pub async fn process_points(payload: Result<Json<Value>, JsonRejection>) -> Response {
    let value = match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!("Request body not decodable as JSON: {}", rejection);
            return (StatusCode::BAD_REQUEST, Json(ErrorBody::invalid_payload())).into_response();
        }
    };

    let points = match check_payload(&value) {
        Ok(points) => points,
        Err(rejection) => {
            for violation in &rejection.violations {
                debug!("Payload violation at {}: {}", violation.field, violation.kind);
            }
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::from_rejection(rejection)),
            )
                .into_response();
        }
    };

    let summary = summarize(&points);

    info!(
        "Processed {} point(s), centroid ({}, {})",
        points.len(),
        summary.centroid.lat,
        summary.centroid.lng
    );

    (
        StatusCode::OK,
        Json(ProcessResponse {
            centroid: summary.centroid,
            bounds: summary.bounds,
        }),
    )
        .into_response()
}
