//! Point resolution and geometry merging.
//!
//! Every location point backing an address must resolve to a WKT point via
//! the external point table; a missing or malformed entry is fatal for the
//! run, never silently substituted. Two or more distinct points merge into
//! a multi-point aggregate.

use geo_types::{MultiPoint, Point};
use wkt::{ToWkt, TryFromWkt};

use crate::error::ResolveError;
use crate::lookup::PointIndex;

/// Narrow interface over the point-to-WKT table.
pub trait PointLookup {
    /// The WKT text for a location-point identifier, if known.
    fn wkt(&self, point: &str) -> Option<&str>;
}

impl PointLookup for PointIndex {
    fn wkt(&self, point: &str) -> Option<&str> {
        PointIndex::wkt(self, point)
    }
}

/// Merges the distinct points backing one address into a single WKT text.
///
/// Returns a `POINT` for one point and a `MULTIPOINT` for several, in the
/// given order. `label` only feeds error context.
///
/// # Errors
///
/// - [`ResolveError::MissingGeometryLookup`] when a point has no WKT entry
/// - [`ResolveError::InvalidWkt`] when an entry does not parse as a point
/// - [`ResolveError::EmptyGeometry`] when `points` is empty
pub fn merge_points(
    points: &[String],
    lookup: &impl PointLookup,
    label: &str,
) -> Result<String, ResolveError> {
    let mut parsed: Vec<Point<f64>> = Vec::with_capacity(points.len());
    for point in points {
        let raw = lookup
            .wkt(point)
            .ok_or_else(|| ResolveError::MissingGeometryLookup {
                point: point.clone(),
                label: label.to_string(),
            })?;
        let p = Point::try_from_wkt_str(raw).map_err(|e| ResolveError::InvalidWkt {
            point: point.clone(),
            reason: e.to_string(),
        })?;
        parsed.push(p);
    }

    match parsed.len() {
        0 => Err(ResolveError::EmptyGeometry {
            label: label.to_string(),
        }),
        1 => Ok(parsed[0].wkt_string()),
        _ => Ok(MultiPoint::from(parsed).wkt_string()),
    }
}
