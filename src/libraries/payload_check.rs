use serde_json::Value;

use crate::models::{FieldViolation, PayloadRejection, Point, Violation};

/// Validate a parsed JSON payload into a non-empty list of points.
///
/// The whole batch is rejected if any single point is invalid; there is no
/// partial acceptance. Unrecognized extra fields on a point record are
/// ignored.
pub fn check_payload(payload: &Value) -> Result<Vec<Point>, PayloadRejection> {
    let body = match payload.as_object() {
        Some(body) => body,
        None => {
            return Err(PayloadRejection::new(vec![FieldViolation::new(
                "body",
                Violation::NotAnObject,
            )]))
        }
    };

    let points_value = match body.get("points") {
        Some(value) => value,
        None => {
            return Err(PayloadRejection::new(vec![FieldViolation::new(
                "points",
                Violation::Missing,
            )]))
        }
    };

    let entries = match points_value.as_array() {
        Some(entries) => entries,
        None => {
            return Err(PayloadRejection::new(vec![FieldViolation::new(
                "points",
                Violation::NotAnArray,
            )]))
        }
    };

    if entries.is_empty() {
        return Err(PayloadRejection::new(vec![FieldViolation::new(
            "points",
            Violation::Empty,
        )]));
    }

    let mut violations = Vec::new();
    let mut points = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let record = match entry.as_object() {
            Some(record) => record,
            None => {
                violations.push(FieldViolation::new(
                    format!("points[{}]", index),
                    Violation::NotAnObject,
                ));
                continue;
            }
        };

        let lat = check_coordinate(record.get("lat"), Axis::Lat, index, &mut violations);
        let lng = check_coordinate(record.get("lng"), Axis::Lng, index, &mut violations);

        if let (Some(lat), Some(lng)) = (lat, lng) {
            points.push(Point::new(lat, lng));
        }
    }

    if violations.is_empty() {
        Ok(points)
    } else {
        Err(PayloadRejection::new(violations))
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Lat,
    Lng,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Axis::Lat => "lat",
            Axis::Lng => "lng",
        }
    }

    fn in_range(self, value: f64) -> bool {
        match self {
            Axis::Lat => value >= -90.0 && value <= 90.0,
            Axis::Lng => value >= -180.0 && value <= 180.0,
        }
    }

    fn range_violation(self) -> Violation {
        match self {
            Axis::Lat => Violation::LatOutOfRange,
            Axis::Lng => Violation::LngOutOfRange,
        }
    }
}

fn check_coordinate(
    value: Option<&Value>,
    axis: Axis,
    index: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let field = format!("points[{}].{}", index, axis.name());

    let value = match value {
        Some(value) => value,
        None => {
            violations.push(FieldViolation::new(field, Violation::Missing));
            return None;
        }
    };

    let number = match value.as_f64() {
        Some(number) => number,
        None => {
            violations.push(FieldViolation::new(field, Violation::NotANumber));
            return None;
        }
    };

    if !axis.in_range(number) {
        violations.push(FieldViolation::new(field, axis.range_violation()));
        return None;
    }

    Some(number)
}
