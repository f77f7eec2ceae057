//! Structural model components: nodes, planar slab elements, and the
//! subsoil support condition.
//!
//! Nodes are owned by the [`StructuralModel`](super::StructuralModel) that
//! created them; slabs reference their corner nodes by name rather than
//! holding them, mirroring the exchange format the analysis worker expects.

use serde::{Deserialize, Serialize};

use crate::materials::ConcreteClass;

/// A named node in local tunnel-section space (m).
///
/// The local frame: x across the section width, y along the driving
/// direction, z upward from the underside of the floor slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralNode {
    /// Unique name within one model (e.g., "floor_1", "wall_2_3")
    pub name: String,
    pub x_m: f64,
    pub y_m: f64,
    pub z_m: f64,
}

impl StructuralNode {
    /// Create a named node
    pub fn new(name: impl Into<String>, x_m: f64, y_m: f64, z_m: f64) -> Self {
        StructuralNode {
            name: name.into(),
            x_m,
            y_m,
            z_m,
        }
    }

    /// Coordinates as an array, handy for exchange serialization
    pub fn coords(&self) -> [f64; 3] {
        [self.x_m, self.y_m, self.z_m]
    }
}

/// A flat structural panel (floor, roof, or wall) connecting 4 nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarElement {
    /// Unique name within one model (e.g., "floor", "wall_2")
    pub name: String,
    /// Corner node names in winding order
    pub corner_nodes: [String; 4],
    /// Slab thickness (m)
    pub thickness_m: f64,
    /// Concrete strength class
    pub material: ConcreteClass,
}

impl PlanarElement {
    /// Create a slab from its corner node names in winding order
    pub fn new(
        name: impl Into<String>,
        corner_nodes: [String; 4],
        thickness_m: f64,
        material: ConcreteClass,
    ) -> Self {
        PlanarElement {
            name: name.into(),
            corner_nodes,
            thickness_m,
            material,
        }
    }
}

/// Subsoil support: soil modeled as a distributed spring reaction under a
/// slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsoilSupport {
    /// Unique support name
    pub name: String,
    /// Name of the supported slab (the floor)
    pub element: String,
    /// Bedding stiffness (kN/m³)
    pub stiffness_kn_m3: f64,
}

impl SubsoilSupport {
    /// Create a subsoil support under the given slab
    pub fn new(name: impl Into<String>, element: impl Into<String>, stiffness_kn_m3: f64) -> Self {
        SubsoilSupport {
            name: name.into(),
            element: element.into(),
            stiffness_kn_m3,
        }
    }
}
