//! # Materials Database
//!
//! Concrete material definitions for tunnel cross-section slabs. Strength
//! classes follow the EN 1992-1-1 designations typically used for cast
//! in-situ tunnel sections.
//!
//! ## Example
//!
//! ```rust
//! use tunnel_core::materials::ConcreteClass;
//!
//! let concrete = ConcreteClass::C30_37;
//! let props = concrete.properties();
//! assert_eq!(concrete.code(), "C30/37");
//! assert!(props.e_modulus_pa > 30.0e9);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Concrete strength class per EN 1992-1-1 Table 3.1
///
/// The designation `Cx/y` gives the characteristic cylinder strength `x`
/// and cube strength `y` in MPa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteClass {
    /// C20/25 - light-duty sections
    C20_25,
    /// C30/37 - default class for cast in-situ tunnel sections
    C30_37,
    /// C35/45 - heavily loaded sections
    C35_45,
}

/// Mechanical properties of a concrete class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Characteristic cylinder strength f_ck (Pa)
    pub fck_pa: f64,
    /// Secant modulus of elasticity E_cm (Pa)
    pub e_modulus_pa: f64,
    /// Poisson's ratio (uncracked)
    pub poisson_ratio: f64,
    /// Density of reinforced concrete (kg/m³)
    pub density_kg_m3: f64,
}

impl ConcreteClass {
    /// All classes in ascending strength order
    pub const ALL: [ConcreteClass; 3] = [
        ConcreteClass::C20_25,
        ConcreteClass::C30_37,
        ConcreteClass::C35_45,
    ];

    /// Standard designation (e.g., "C30/37")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteClass::C20_25 => "C20/25",
            ConcreteClass::C30_37 => "C30/37",
            ConcreteClass::C35_45 => "C35/45",
        }
    }

    /// Look up a class by its designation
    pub fn from_code(code: &str) -> Option<Self> {
        BY_CODE.get(code).copied()
    }

    /// Reference design values per EN 1992-1-1 Table 3.1
    pub fn properties(&self) -> ConcreteProperties {
        match self {
            ConcreteClass::C20_25 => ConcreteProperties {
                fck_pa: 20.0e6,
                e_modulus_pa: 30.0e9,
                poisson_ratio: 0.2,
                density_kg_m3: 2500.0,
            },
            ConcreteClass::C30_37 => ConcreteProperties {
                fck_pa: 30.0e6,
                e_modulus_pa: 33.0e9,
                poisson_ratio: 0.2,
                density_kg_m3: 2500.0,
            },
            ConcreteClass::C35_45 => ConcreteProperties {
                fck_pa: 35.0e6,
                e_modulus_pa: 34.0e9,
                poisson_ratio: 0.2,
                density_kg_m3: 2500.0,
            },
        }
    }
}

impl std::fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Default for ConcreteClass {
    fn default() -> Self {
        ConcreteClass::C30_37
    }
}

/// Designation → class lookup, built once on first use
static BY_CODE: Lazy<HashMap<&'static str, ConcreteClass>> = Lazy::new(|| {
    ConcreteClass::ALL
        .iter()
        .map(|class| (class.code(), *class))
        .collect()
});
