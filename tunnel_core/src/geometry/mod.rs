//! Alignment geometry: geographic points, planar RD projection, and
//! segment decomposition of a tunnel centerline.
//!
//! # Overview
//!
//! - [`GeoPoint`] / [`RdPoint`] - geographic and planar coordinates
//! - [`projection`] - WGS84 ↔ RD conversion behind the [`Projection`] trait
//! - [`polyline`] - arc-length parametrized planar polylines
//! - [`segments`] - equal-length segment ribbons for map display
//!
//! # Example
//!
//! ```
//! use tunnel_core::geometry::{GeoPoint, GeoPolyline, SegmentDecomposer};
//! use tunnel_core::geometry::projection::RdNew;
//!
//! let alignment = GeoPolyline::new(vec![
//!     GeoPoint::new(52.0860, 5.1214),
//!     GeoPoint::new(52.0862, 5.1280),
//! ]);
//!
//! let planar = alignment.project(&RdNew);
//! let decomposer = SegmentDecomposer::new(planar.unwrap(), 4, 40.0).unwrap();
//! let decomposition = decomposer.decompose().unwrap();
//! assert_eq!(decomposition.segments.len(), 4);
//! ```

pub mod polyline;
pub mod projection;
pub mod segments;

pub use polyline::{GeoPolyline, PlanarPolyline};
pub use projection::{Projection, RdNew};
pub use segments::{Decomposition, SegmentDecomposer, SegmentRibbon};

use serde::{Deserialize, Serialize};

/// A geographic coordinate (WGS84 latitude/longitude in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, north positive
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }
}

/// A planar coordinate in the RD (Rijksdriehoek) projection, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RdPoint {
    /// Easting in meters
    pub x: f64,
    /// Northing in meters
    pub y: f64,
}

impl RdPoint {
    /// Create a new planar point
    pub fn new(x: f64, y: f64) -> Self {
        RdPoint { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &RdPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = RdPoint::new(0.0, 0.0);
        let b = RdPoint::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_point_serialization() {
        let p = GeoPoint::new(52.1, 5.4);
        let json = serde_json::to_string(&p).unwrap();
        let roundtrip: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, roundtrip);
    }
}
