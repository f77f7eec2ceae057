//! Equal-length segment decomposition of a tunnel alignment.
//!
//! The projected centerline is cut into `n` equal-arc-length segments; each
//! segment gets a ribbon polygon spanning `half_width` to either side of the
//! centerline, suitable for map display of the segment footprints.
//!
//! # Winding convention
//!
//! Ribbon polygons are closed and counter-clockwise: the right-hand offset
//! curve is traversed forward (in station order) and the left-hand offset
//! curve backward. Consumers that need clockwise polygons can reverse the
//! point order; [`signed_area`] makes the orientation checkable.

use serde::{Deserialize, Serialize};

use super::polyline::{PlanarPolyline, LENGTH_TOLERANCE};
use super::RdPoint;
use crate::errors::{TunnelError, TunnelResult};

/// One equal-length segment of the alignment with its ribbon polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRibbon {
    /// Segment index, `0..segments`
    pub index: usize,
    /// Arc-length station where the segment begins (m)
    pub begin_m: f64,
    /// Arc-length station where the segment ends (m)
    pub end_m: f64,
    /// Closed counter-clockwise boundary polygon (not repeated at the end)
    pub polygon: Vec<RdPoint>,
}

/// The full decomposition of an alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Ribbons in station order, one per segment
    pub segments: Vec<SegmentRibbon>,
    /// The projected centerline, for overlay rendering
    pub centerline: Vec<RdPoint>,
    /// Total projected arc length (m)
    pub total_length_m: f64,
}

/// Cuts an alignment into equal-arc-length ribbon segments.
///
/// Purely functional: the input polyline is never mutated, and every call
/// with the same inputs produces the same output.
#[derive(Debug, Clone)]
pub struct SegmentDecomposer {
    polyline: PlanarPolyline,
    segments: usize,
    half_width_m: f64,
}

impl SegmentDecomposer {
    /// Create a decomposer.
    ///
    /// # Errors
    ///
    /// Returns [`TunnelError::InvalidGeometry`] when `segments == 0` or the
    /// half-width is not positive. (A degenerate polyline is already
    /// rejected by [`PlanarPolyline::new`].)
    pub fn new(
        polyline: PlanarPolyline,
        segments: usize,
        half_width_m: f64,
    ) -> TunnelResult<Self> {
        if segments == 0 {
            return Err(TunnelError::invalid_geometry(
                "segments",
                "0",
                "At least one segment is required",
            ));
        }
        if half_width_m <= 0.0 {
            return Err(TunnelError::invalid_geometry(
                "half_width_m",
                half_width_m.to_string(),
                "Ribbon half-width must be positive",
            ));
        }
        Ok(SegmentDecomposer {
            polyline,
            segments,
            half_width_m,
        })
    }

    /// Produce the segment ribbons and overlay centerline.
    pub fn decompose(&self) -> TunnelResult<Decomposition> {
        let total = self.polyline.total_length();
        let step = total / self.segments as f64;

        let mut ribbons = Vec::with_capacity(self.segments);
        for index in 0..self.segments {
            let begin = index as f64 * step;
            // Land exactly on the path end for the last segment.
            let end = if index + 1 == self.segments {
                total
            } else {
                (index + 1) as f64 * step
            };

            let centerline = self.polyline.sub_polyline(begin, end)?;
            let left = offset_polyline(&centerline, self.half_width_m);
            let right = offset_polyline(&centerline, -self.half_width_m);

            // Right side forward, left side backward: counter-clockwise.
            let mut polygon = right;
            polygon.extend(left.into_iter().rev());

            ribbons.push(SegmentRibbon {
                index,
                begin_m: begin,
                end_m: end,
                polygon,
            });
        }

        Ok(Decomposition {
            segments: ribbons,
            centerline: self.polyline.points().to_vec(),
            total_length_m: total,
        })
    }
}

/// Offset an open polyline perpendicular to its direction of travel.
///
/// Positive distances offset to the left of the walking direction, negative
/// to the right. Interior vertices get a miter join; joins that would
/// diverge (near-reversals) fall back to the incoming segment's normal.
fn offset_polyline(points: &[RdPoint], distance: f64) -> Vec<RdPoint> {
    // Drop coincident consecutive points so every remaining segment has a
    // well-defined direction and normals stay aligned with vertices.
    let mut path: Vec<RdPoint> = Vec::with_capacity(points.len());
    for &point in points {
        let keep = path
            .last()
            .map_or(true, |last| last.distance_to(&point) >= LENGTH_TOLERANCE);
        if keep {
            path.push(point);
        }
    }
    debug_assert!(path.len() >= 2, "callers pass positive-length polylines");

    // Left unit normal of each segment.
    let normals: Vec<(f64, f64)> = path
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            let len = dx.hypot(dy);
            (-dy / len, dx / len)
        })
        .collect();

    let mut offset = Vec::with_capacity(path.len());
    let first = normals[0];
    offset.push(RdPoint::new(
        path[0].x + first.0 * distance,
        path[0].y + first.1 * distance,
    ));

    for i in 1..path.len() - 1 {
        let prev = normals[i - 1];
        let next = normals[i];
        let dot = prev.0 * next.0 + prev.1 * next.1;
        let point = path[i];
        if 1.0 + dot < 1.0e-6 {
            // Near-reversal: a miter would shoot to infinity.
            offset.push(RdPoint::new(
                point.x + prev.0 * distance,
                point.y + prev.1 * distance,
            ));
        } else {
            let scale = distance / (1.0 + dot);
            offset.push(RdPoint::new(
                point.x + (prev.0 + next.0) * scale,
                point.y + (prev.1 + next.1) * scale,
            ));
        }
    }

    let last = normals[normals.len() - 1];
    let end = path[path.len() - 1];
    offset.push(RdPoint::new(
        end.x + last.0 * distance,
        end.y + last.1 * distance,
    ));
    offset
}

/// Twice-signed-area based orientation: positive for counter-clockwise
/// polygons, negative for clockwise.
pub fn signed_area(polygon: &[RdPoint]) -> f64 {
    let n = polygon.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}
