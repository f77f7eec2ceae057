//! Cross-section structural model: nodes, slabs, supports, and loads.
//!
//! # Overview
//!
//! - [`components`] - [`StructuralNode`], [`PlanarElement`], [`SubsoilSupport`]
//! - [`loads`] - load group / case / combination / surface load types
//! - [`builder`] - [`CrossSectionParams`] and [`build_cross_section`]
//!
//! A [`StructuralModel`] is assembled once per request from validated
//! parameters and never mutated afterwards; hosts serialize it, hand it to
//! the visualization layer, or ship it to the analysis worker via
//! [`exchange`](crate::exchange).
//!
//! # Example
//!
//! ```
//! use tunnel_core::model::{build_cross_section, CrossSectionParams};
//!
//! let params = CrossSectionParams {
//!     width_m: 8.0,
//!     height_m: 5.0,
//!     floor_thickness_m: 0.4,
//!     roof_thickness_m: 0.4,
//!     wall_thickness_m: 0.6,
//!     sections: 1,
//!     soil_stiffness_kn_m3: 300.0,
//!     roof_load_kn_m2: 10.0,
//!     material: Default::default(),
//! };
//! let model = build_cross_section(&params, 20.0).unwrap();
//! assert_eq!(model.slabs.len(), 4); // floor, roof, 2 walls
//! ```

pub mod builder;
pub mod components;
pub mod loads;

pub use builder::{build_cross_section, CrossSectionParams};
pub use components::{PlanarElement, StructuralNode, SubsoilSupport};
pub use loads::{
    CaseFactor, CombinationKind, ImposedLoadCategory, LoadCase, LoadCaseAction,
    LoadCaseSpecification, LoadCombination, LoadDuration, LoadGroup, LoadGroupRelation,
    SurfaceLoad,
};

use serde::{Deserialize, Serialize};

/// The assembled plate model of one tunnel cross-section cell.
///
/// Nodes are owned here; slabs, supports, and loads reference them (and each
/// other) by name. Built in one shot by
/// [`build_cross_section`]; the aggregate is plain data from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralModel {
    /// All nodes, in creation order
    pub nodes: Vec<StructuralNode>,
    /// Floor, roof, and wall slabs, in creation order
    pub slabs: Vec<PlanarElement>,
    /// Support conditions (the subsoil spring under the floor)
    pub supports: Vec<SubsoilSupport>,
    /// Load groups
    pub load_groups: Vec<LoadGroup>,
    /// Load cases
    pub load_cases: Vec<LoadCase>,
    /// Load combinations
    pub combinations: Vec<LoadCombination>,
    /// Surface loads on slabs
    pub surface_loads: Vec<SurfaceLoad>,
}

impl StructuralModel {
    /// Find a node by name
    pub fn node(&self, name: &str) -> Option<&StructuralNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Find a slab by name
    pub fn slab(&self, name: &str) -> Option<&PlanarElement> {
        self.slabs.iter().find(|s| s.name == name)
    }

    /// Check that every slab corner and load target resolves to an existing
    /// node/slab/case. The builder always produces consistent models; this
    /// is the guard hosts can run on deserialized payloads.
    pub fn is_consistent(&self) -> bool {
        let slab_corners_ok = self
            .slabs
            .iter()
            .all(|s| s.corner_nodes.iter().all(|n| self.node(n).is_some()));
        let supports_ok = self.supports.iter().all(|s| self.slab(&s.element).is_some());
        let cases_ok = self
            .load_cases
            .iter()
            .all(|c| self.load_groups.iter().any(|g| g.name == c.group));
        let loads_ok = self.surface_loads.iter().all(|l| {
            self.slab(&l.element).is_some()
                && self.load_cases.iter().any(|c| c.name == l.case)
        });
        slab_corners_ok && supports_ok && cases_ok && loads_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StructuralModel {
        build_cross_section(
            &CrossSectionParams {
                width_m: 10.0,
                height_m: 6.0,
                floor_thickness_m: 0.5,
                roof_thickness_m: 0.5,
                wall_thickness_m: 1.0,
                sections: 2,
                soil_stiffness_kn_m3: 400.0,
                roof_load_kn_m2: 5.0,
                material: Default::default(),
            },
            25.0,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_name() {
        let model = sample();
        assert!(model.node("floor_1").is_some());
        assert!(model.slab("wall_2").is_some());
        assert!(model.node("nope").is_none());
    }

    #[test]
    fn test_built_model_is_consistent() {
        assert!(sample().is_consistent());
    }

    #[test]
    fn test_inconsistency_detected() {
        let mut model = sample();
        model.surface_loads[0].element = "missing".to_string();
        assert!(!model.is_consistent());
    }

    #[test]
    fn test_model_serialization() {
        let model = sample();
        let json = serde_json::to_string(&model).unwrap();
        let roundtrip: StructuralModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, roundtrip);
    }
}
