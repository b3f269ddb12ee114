use geo::{BoundingRect, Centroid, MultiPoint, Point as GeoPoint};

use crate::models::{Bounds, Point};

/// Derived summary of a point set: arithmetic centroid and axis-aligned
/// bounding box. No wraparound handling at the anti-meridian.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoSummary {
    pub centroid: Point,
    pub bounds: Bounds,
}

/// Reduce a pre-validated point list to its centroid and bounds.
///
/// The input must be non-empty; an empty slice is a caller bug. The centroid
/// is the flat arithmetic mean of each axis, not a spherical one.
pub fn summarize(points: &[Point]) -> GeoSummary {
    assert!(
        !points.is_empty(),
        "summarize requires at least one point"
    );
    debug_assert!(points.iter().all(Point::is_valid));

    let collection: MultiPoint<f64> = points
        .iter()
        .map(|p| GeoPoint::new(p.lng, p.lat))
        .collect();

    let centroid = collection
        .centroid()
        .expect("a non-empty point collection has a centroid");
    let rect = collection
        .bounding_rect()
        .expect("a non-empty point collection has a bounding rect");

    GeoSummary {
        centroid: Point::new(centroid.y(), centroid.x()),
        bounds: Bounds {
            north: rect.max().y,
            south: rect.min().y,
            east: rect.max().x,
            west: rect.min().x,
        },
    }
}
