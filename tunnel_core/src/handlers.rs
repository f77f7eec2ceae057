//! View request dispatch.
//!
//! The hosting application maps its user actions onto [`ViewRequest`]
//! variants and hands them to [`dispatch`], a pure function over validated
//! parameters. Per-deployment knobs live in an explicit [`AppConfig`] passed
//! at startup — there is no process-wide mutable configuration.
//!
//! # Example
//!
//! ```
//! use tunnel_core::geometry::{GeoPoint, GeoPolyline, RdNew};
//! use tunnel_core::handlers::{dispatch, AppConfig, ViewRequest, ViewResult};
//!
//! let config = AppConfig::default();
//! let request = ViewRequest::Map {
//!     polyline: GeoPolyline::new(vec![
//!         GeoPoint::new(52.0860, 5.1214),
//!         GeoPoint::new(52.0862, 5.1280),
//!     ]),
//!     segments: 4,
//! };
//!
//! match dispatch(&config, &RdNew, request).unwrap() {
//!     ViewResult::Map(features) => assert!(!features.features.is_empty()),
//!     _ => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{TunnelError, TunnelResult};
use crate::exchange::{AnalysisJob, DEFAULT_TIMEOUT_S};
use crate::geometry::{GeoPoint, GeoPolyline, Projection, SegmentDecomposer};
use crate::model::{build_cross_section, CrossSectionParams};
use crate::visualization::{build_solids, Solid};

/// Startup configuration for one deployment of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display label of the entity the views belong to
    pub label: String,
    /// Half-width of the segment ribbons on the map (m)
    pub ribbon_half_width_m: f64,
    /// Time budget handed to the analysis worker (s)
    pub analysis_timeout_s: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            label: "Tunnel".to_string(),
            ribbon_half_width_m: 40.0,
            analysis_timeout_s: DEFAULT_TIMEOUT_S,
        }
    }
}

/// A user-triggered view invocation with its validated parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view")]
pub enum ViewRequest {
    /// Map display of the alignment and its segment footprints
    Map {
        polyline: GeoPolyline,
        segments: usize,
    },
    /// 3D display of one cross-section cell
    Scene {
        params: CrossSectionParams,
        length_m: f64,
    },
    /// Build the analysis job for the representative cross-section;
    /// the cell length is derived from the alignment and segment count
    Analysis {
        polyline: GeoPolyline,
        segments: usize,
        params: CrossSectionParams,
    },
}

/// A renderable feature in geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MapFeature {
    Point { point: GeoPoint },
    Polyline { points: Vec<GeoPoint> },
    Polygon { points: Vec<GeoPoint> },
}

/// The payload of the map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFeatureSet {
    pub features: Vec<MapFeature>,
}

/// What a view invocation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view")]
pub enum ViewResult {
    Map(MapFeatureSet),
    Scene { solids: Vec<Solid> },
    Analysis { job: AnalysisJob },
}

/// Handle one view request.
///
/// Validation failures surface exactly as the underlying builders raise
/// them; dispatch adds no rules of its own.
///
/// # Errors
///
/// [`TunnelError::InvalidGeometry`] / [`TunnelError::InvalidParameter`]
/// from the geometry and model layers.
pub fn dispatch(
    config: &AppConfig,
    projection: &impl Projection,
    request: ViewRequest,
) -> TunnelResult<ViewResult> {
    match request {
        ViewRequest::Map { polyline, segments } => {
            map_view(config, projection, &polyline, segments).map(ViewResult::Map)
        }
        ViewRequest::Scene { params, length_m } => {
            build_solids(&params, length_m).map(|solids| ViewResult::Scene { solids })
        }
        ViewRequest::Analysis {
            polyline,
            segments,
            params,
        } => {
            let length_m = segment_length(projection, &polyline, segments)?;
            let model = build_cross_section(&params, length_m)?;
            Ok(ViewResult::Analysis {
                job: AnalysisJob::new(&model, config.analysis_timeout_s),
            })
        }
    }
}

/// Derived cross-section cell length: total projected length / segments.
fn segment_length(
    projection: &impl Projection,
    polyline: &GeoPolyline,
    segments: usize,
) -> TunnelResult<f64> {
    if segments == 0 {
        return Err(TunnelError::invalid_geometry(
            "segments",
            "0",
            "At least one segment is required",
        ));
    }
    let planar = polyline.project(projection)?;
    Ok(planar.total_length() / segments as f64)
}

/// Segment footprints, their corner markers, and the drawn centerline.
fn map_view(
    config: &AppConfig,
    projection: &impl Projection,
    polyline: &GeoPolyline,
    segments: usize,
) -> TunnelResult<MapFeatureSet> {
    let planar = polyline.project(projection)?;
    let decomposition =
        SegmentDecomposer::new(planar, segments, config.ribbon_half_width_m)?.decompose()?;

    let mut features = Vec::new();
    for ribbon in &decomposition.segments {
        let corners: Vec<GeoPoint> = ribbon
            .polygon
            .iter()
            .map(|p| projection.to_geographic(p))
            .collect();
        for &point in &corners {
            features.push(MapFeature::Point { point });
        }
        features.push(MapFeature::Polygon { points: corners });
    }
    features.push(MapFeature::Polyline {
        points: polyline.points.clone(),
    });
    Ok(MapFeatureSet { features })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RdNew;
    use crate::materials::ConcreteClass;

    fn alignment() -> GeoPolyline {
        GeoPolyline::new(vec![
            GeoPoint::new(52.0860, 5.1214),
            GeoPoint::new(52.0862, 5.1280),
        ])
    }

    fn params() -> CrossSectionParams {
        CrossSectionParams {
            width_m: 10.0,
            height_m: 6.0,
            floor_thickness_m: 0.5,
            roof_thickness_m: 0.5,
            wall_thickness_m: 1.0,
            sections: 2,
            soil_stiffness_kn_m3: 400.0,
            roof_load_kn_m2: 5.0,
            material: ConcreteClass::C30_37,
        }
    }

    #[test]
    fn test_map_view_features() {
        let request = ViewRequest::Map {
            polyline: alignment(),
            segments: 4,
        };
        let result = dispatch(&AppConfig::default(), &RdNew, request).unwrap();
        let ViewResult::Map(set) = result else {
            panic!("expected map result");
        };

        let polygons = set
            .features
            .iter()
            .filter(|f| matches!(f, MapFeature::Polygon { .. }))
            .count();
        let polylines = set
            .features
            .iter()
            .filter(|f| matches!(f, MapFeature::Polyline { .. }))
            .count();
        let points = set
            .features
            .iter()
            .filter(|f| matches!(f, MapFeature::Point { .. }))
            .count();

        assert_eq!(polygons, 4);
        assert_eq!(polylines, 1);
        // Straight two-point alignment: 4 corners per ribbon.
        assert_eq!(points, 16);
    }

    #[test]
    fn test_map_view_zero_segments() {
        let request = ViewRequest::Map {
            polyline: alignment(),
            segments: 0,
        };
        let err = dispatch(&AppConfig::default(), &RdNew, request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_scene_view() {
        let request = ViewRequest::Scene {
            params: params(),
            length_m: 25.0,
        };
        let result = dispatch(&AppConfig::default(), &RdNew, request).unwrap();
        let ViewResult::Scene { solids } = result else {
            panic!("expected scene result");
        };
        assert_eq!(solids.len(), 5);
    }

    #[test]
    fn test_analysis_view_uses_config_timeout() {
        let config = AppConfig {
            analysis_timeout_s: 42,
            ..AppConfig::default()
        };
        let request = ViewRequest::Analysis {
            polyline: alignment(),
            segments: 4,
            params: params(),
        };
        let result = dispatch(&config, &RdNew, request).unwrap();
        let ViewResult::Analysis { job } = result else {
            panic!("expected analysis result");
        };
        assert_eq!(job.timeout_s, 42);
        assert_eq!(job.model.nodes.len(), 20);
    }

    #[test]
    fn test_analysis_view_invalid_params() {
        let mut bad = params();
        bad.sections = 0;
        let request = ViewRequest::Analysis {
            polyline: alignment(),
            segments: 4,
            params: bad,
        };
        let err = dispatch(&AppConfig::default(), &RdNew, request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn test_request_serialization_tags() {
        let request = ViewRequest::Map {
            polyline: alignment(),
            segments: 2,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"view\":\"Map\""));
        let roundtrip: ViewRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, roundtrip);
    }
}
