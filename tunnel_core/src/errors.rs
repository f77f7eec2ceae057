//! # Error Types
//!
//! Structured error types for tunnel_core. Every failure carries enough
//! context to understand and fix the offending input programmatically, and
//! all variants serialize cleanly so hosts can forward them as-is.
//!
//! ## Example
//!
//! ```rust
//! use tunnel_core::errors::{TunnelError, TunnelResult};
//!
//! fn validate_width(width_m: f64) -> TunnelResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(TunnelError::invalid_parameter(
//!             "width_m",
//!             width_m.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tunnel_core operations
pub type TunnelResult<T> = Result<T, TunnelError>;

/// Structured error type for geometry and model operations.
///
/// Validation errors (`InvalidGeometry`, `InvalidParameter`) are always
/// raised before any node, element, or polygon is created — a failed build
/// never returns a partial result. Service errors come back from the
/// external analysis worker and are terminal for the request.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TunnelError {
    /// The alignment polyline or segment count is degenerate
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A cross-section parameter is out of its physical range
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// The analysis worker did not finish within the allotted time
    #[error("Analysis worker timed out after {timeout_s} s")]
    ServiceTimeout { timeout_s: u64 },

    /// The analysis worker failed or returned an incomplete report
    #[error("Analysis worker failed: {reason}")]
    ServiceFailure { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl TunnelError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TunnelError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TunnelError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ServiceFailure error
    pub fn service_failure(reason: impl Into<String>) -> Self {
        TunnelError::ServiceFailure {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., worth resubmitting later)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TunnelError::ServiceTimeout { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TunnelError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            TunnelError::InvalidParameter { .. } => "INVALID_PARAMETER",
            TunnelError::ServiceTimeout { .. } => "SERVICE_TIMEOUT",
            TunnelError::ServiceFailure { .. } => "SERVICE_FAILURE",
            TunnelError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for TunnelError {
    fn from(err: serde_json::Error) -> Self {
        TunnelError::Serialization {
            reason: err.to_string(),
        }
    }
}
