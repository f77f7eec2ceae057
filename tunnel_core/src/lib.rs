//! # tunnel_core - Tunnel Alignment & Cross-Section Model Engine
//!
//! `tunnel_core` turns a user-drawn tunnel alignment and a handful of
//! cross-section parameters into map geometry, renderable 3D solids, and a
//! plate structural model ready for an external finite-element worker.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every view invocation rebuilds its result from the
//!   supplied parameters; nothing is cached or persisted between requests
//! - **JSON-First**: All inputs, outputs, and errors implement
//!   Serialize/Deserialize
//! - **Validate, then build**: Bad input fails before the first node or
//!   polygon exists — a partial result is never observable
//! - **External collaborators behind traits**: The geodetic projection and
//!   the analysis worker are seams, not dependencies
//!
//! ## Quick Start
//!
//! ```rust
//! use tunnel_core::geometry::{GeoPoint, GeoPolyline, RdNew};
//! use tunnel_core::handlers::{dispatch, AppConfig, ViewRequest};
//!
//! let request = ViewRequest::Map {
//!     polyline: GeoPolyline::new(vec![
//!         GeoPoint::new(52.0860, 5.1214),
//!         GeoPoint::new(52.0862, 5.1280),
//!     ]),
//!     segments: 4,
//! };
//!
//! let result = dispatch(&AppConfig::default(), &RdNew, request).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - projection, polylines, and segment decomposition
//! - [`model`] - cross-section structural model assembly
//! - [`visualization`] - renderable solids for the 3D view
//! - [`exchange`] - analysis-worker payload and submission
//! - [`handlers`] - view request dispatch and startup configuration
//! - [`materials`] - concrete strength classes
//! - [`units`] - type-safe SI unit wrappers
//! - [`errors`] - structured error types

pub mod errors;
pub mod exchange;
pub mod geometry;
pub mod handlers;
pub mod materials;
pub mod model;
pub mod units;
pub mod visualization;

// Re-export commonly used types at crate root for convenience
pub use errors::{TunnelError, TunnelResult};
pub use geometry::{GeoPoint, GeoPolyline, RdPoint, SegmentDecomposer};
pub use handlers::{dispatch, AppConfig, ViewRequest, ViewResult};
pub use model::{build_cross_section, CrossSectionParams, StructuralModel};
