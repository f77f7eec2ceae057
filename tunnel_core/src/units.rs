//! # Unit Types
//!
//! Type-safe wrappers for the SI units this domain touches. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The model works in a consistent, small set of SI units
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! - Length: meters (m)
//! - Force: newtons (N), kilonewtons (kN)
//! - Pressure / surface load: pascals (Pa = N/m²), kilopascals (kPa = kN/m²)
//!
//! The `KiloPascals` → `Pascals` conversion is the single unit conversion the
//! model performs: user-facing loads are entered in kN/m² and the analysis
//! exchange format expects N/m².
//!
//! ## Example
//!
//! ```rust
//! use tunnel_core::units::{KiloPascals, Pascals};
//!
//! let roof_load = KiloPascals(5.0);
//! let exchange: Pascals = roof_load.into();
//! assert_eq!(exchange.0, 5000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Pressure in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl From<KiloPascals> for Pascals {
    fn from(kpa: KiloPascals) -> Self {
        Pascals(kpa.0 * 1000.0)
    }
}

impl From<Pascals> for KiloPascals {
    fn from(pa: Pascals) -> Self {
        KiloPascals(pa.0 / 1000.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(Pascals);
impl_arithmetic!(KiloPascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilonewtons_to_newtons() {
        let kn = KiloNewtons(1.5);
        let n: Newtons = kn.into();
        assert_eq!(n.0, 1500.0);
    }

    #[test]
    fn test_kilopascals_to_pascals() {
        let kpa = KiloPascals(5.0);
        let pa: Pascals = kpa.into();
        assert_eq!(pa.0, 5000.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
