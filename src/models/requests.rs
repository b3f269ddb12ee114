use serde::{Deserialize, Serialize};

use super::point::{Bounds, FieldViolation, PayloadRejection, Point};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub centroid: Point,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,

    // Per-field violations (omitted when nothing field-level could be derived,
    // e.g. the body was not decodable as JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ErrorBody {
    /// Message-only failure shape, used when the body could not be parsed.
    pub fn invalid_payload() -> Self {
        Self {
            error: PayloadRejection::default().to_string(),
            details: None,
        }
    }

    pub fn from_rejection(rejection: PayloadRejection) -> Self {
        let message = rejection.to_string();
        let details = if rejection.violations.is_empty() {
            None
        } else {
            Some(rejection.violations)
        };

        Self {
            error: message,
            details,
        }
    }
}
