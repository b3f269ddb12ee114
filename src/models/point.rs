use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    /// Create a new point
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

/// Axis-aligned lat/lng extrema of a point set. Derived by the aggregator,
/// never constructed from client input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn contains(&self, point: &Point) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

/// The ways a single field of the request payload can be unacceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    #[error("required field is missing")]
    Missing,

    #[error("expected an array of point objects")]
    NotAnArray,

    #[error("array must contain at least one point")]
    Empty,

    #[error("expected an object with 'lat' and 'lng'")]
    NotAnObject,

    #[error("expected a JSON number")]
    NotANumber,

    #[error("latitude must be within [-90, 90]")]
    LatOutOfRange,

    #[error("longitude must be within [-180, 180]")]
    LngOutOfRange,
}

/// One per-field violation, with the path into the payload it was found at
/// (e.g. `points[2].lat`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub kind: Violation,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: Violation) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// Whole-request rejection. The Display text is the uniform client-facing
/// message; `violations` is empty when the body was not decodable at all.
#[derive(Debug, Clone, Default, thiserror::Error)]
#[error("The body must have 'points' as a non-empty array of objects with valid numeric 'lat' and 'lng'.")]
pub struct PayloadRejection {
    pub violations: Vec<FieldViolation>,
}

impl PayloadRejection {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}
