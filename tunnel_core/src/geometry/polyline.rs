//! Arc-length parametrized polylines.
//!
//! A [`GeoPolyline`] is the raw user-drawn alignment; projecting it yields a
//! [`PlanarPolyline`] on which all length, sampling, and offset computation
//! happens. Stations are arc-length offsets from the start of the line, in
//! meters.

use serde::{Deserialize, Serialize};

use super::projection::Projection;
use super::{GeoPoint, RdPoint};
use crate::errors::{TunnelError, TunnelResult};

/// Tolerance below which a length is treated as degenerate (m)
pub(crate) const LENGTH_TOLERANCE: f64 = 1.0e-9;

/// A user-supplied geographic polyline. Immutable once supplied; validation
/// happens when it is projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPolyline {
    /// Ordered geographic points
    pub points: Vec<GeoPoint>,
}

impl GeoPolyline {
    /// Create a polyline from geographic points
    pub fn new(points: Vec<GeoPoint>) -> Self {
        GeoPolyline { points }
    }

    /// Project into the planar RD system.
    ///
    /// # Errors
    ///
    /// Returns [`TunnelError::InvalidGeometry`] when fewer than 2 points are
    /// supplied or the projected path has no length.
    pub fn project(&self, projection: &impl Projection) -> TunnelResult<PlanarPolyline> {
        let points = self
            .points
            .iter()
            .map(|p| projection.to_planar(p))
            .collect();
        PlanarPolyline::new(points)
    }
}

/// A planar polyline with at least 2 points and positive total length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarPolyline {
    points: Vec<RdPoint>,
    /// Cumulative arc length at each point; `stations[0] == 0`,
    /// `stations.last() == total_length`
    stations: Vec<f64>,
}

impl PlanarPolyline {
    /// Create a planar polyline, validating that it is non-degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`TunnelError::InvalidGeometry`] for fewer than 2 points or a
    /// path of (numerically) zero length.
    pub fn new(points: Vec<RdPoint>) -> TunnelResult<Self> {
        if points.len() < 2 {
            return Err(TunnelError::invalid_geometry(
                "points",
                points.len().to_string(),
                "A polyline needs at least 2 points",
            ));
        }

        let mut stations = Vec::with_capacity(points.len());
        let mut total = 0.0;
        stations.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].distance_to(&pair[1]);
            stations.push(total);
        }

        if total < LENGTH_TOLERANCE {
            return Err(TunnelError::invalid_geometry(
                "points",
                format!("{} coincident points", points.len()),
                "The polyline has zero length",
            ));
        }

        Ok(PlanarPolyline { points, stations })
    }

    /// The ordered planar points
    pub fn points(&self) -> &[RdPoint] {
        &self.points
    }

    /// Total arc length of the path (m)
    pub fn total_length(&self) -> f64 {
        *self.stations.last().unwrap_or(&0.0)
    }

    /// Point at the given station, clamped to `[0, total_length]`.
    pub fn point_at(&self, station: f64) -> RdPoint {
        let station = station.clamp(0.0, self.total_length());
        // Find the segment containing the station and interpolate inside it.
        for (i, pair) in self.stations.windows(2).enumerate() {
            if station <= pair[1] {
                let span = pair[1] - pair[0];
                let t = if span < LENGTH_TOLERANCE {
                    0.0
                } else {
                    (station - pair[0]) / span
                };
                let a = self.points[i];
                let b = self.points[i + 1];
                return RdPoint::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
            }
        }
        *self.points.last().expect("validated to hold >= 2 points")
    }

    /// Extract the sub-polyline between two stations: the interpolated end
    /// points plus every original vertex strictly between them.
    ///
    /// # Errors
    ///
    /// Returns [`TunnelError::InvalidGeometry`] when `begin >= end` after
    /// clamping (a zero-length cut).
    pub fn sub_polyline(&self, begin: f64, end: f64) -> TunnelResult<Vec<RdPoint>> {
        let begin = begin.clamp(0.0, self.total_length());
        let end = end.clamp(0.0, self.total_length());
        if end - begin < LENGTH_TOLERANCE {
            return Err(TunnelError::invalid_geometry(
                "stations",
                format!("[{begin}, {end}]"),
                "Sub-polyline stations must span a positive length",
            ));
        }

        let mut cut = vec![self.point_at(begin)];
        for (i, &station) in self.stations.iter().enumerate() {
            if station > begin + LENGTH_TOLERANCE && station < end - LENGTH_TOLERANCE {
                cut.push(self.points[i]);
            }
        }
        cut.push(self.point_at(end));
        Ok(cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> PlanarPolyline {
        PlanarPolyline::new(vec![
            RdPoint::new(0.0, 0.0),
            RdPoint::new(60.0, 0.0),
            RdPoint::new(60.0, 40.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_single_point() {
        let err = PlanarPolyline::new(vec![RdPoint::new(1.0, 1.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_rejects_zero_length() {
        let err =
            PlanarPolyline::new(vec![RdPoint::new(1.0, 1.0), RdPoint::new(1.0, 1.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_total_length() {
        assert_eq!(l_shape().total_length(), 100.0);
    }

    #[test]
    fn test_point_at_interpolates() {
        let line = l_shape();
        assert_eq!(line.point_at(30.0), RdPoint::new(30.0, 0.0));
        assert_eq!(line.point_at(60.0), RdPoint::new(60.0, 0.0));
        assert_eq!(line.point_at(80.0), RdPoint::new(60.0, 20.0));
    }

    #[test]
    fn test_point_at_clamps() {
        let line = l_shape();
        assert_eq!(line.point_at(-5.0), RdPoint::new(0.0, 0.0));
        assert_eq!(line.point_at(1000.0), RdPoint::new(60.0, 40.0));
    }

    #[test]
    fn test_sub_polyline_keeps_interior_vertices() {
        let line = l_shape();
        let cut = line.sub_polyline(30.0, 80.0).unwrap();
        assert_eq!(
            cut,
            vec![
                RdPoint::new(30.0, 0.0),
                RdPoint::new(60.0, 0.0),
                RdPoint::new(60.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_sub_polyline_rejects_empty_span() {
        let line = l_shape();
        assert!(line.sub_polyline(50.0, 50.0).is_err());
        assert!(line.sub_polyline(80.0, 30.0).is_err());
    }
}
