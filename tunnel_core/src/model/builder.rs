//! Cross-section structural model assembly.
//!
//! One representative cell of the tunnel — floor slab, roof slab, and the
//! section walls — is assembled into a plate model for the structural check.
//! The cell's length along the driving direction is the derived segment
//! length (total alignment length / segment count).
//!
//! ## Example
//!
//! ```rust
//! use tunnel_core::model::{build_cross_section, CrossSectionParams};
//!
//! let params = CrossSectionParams {
//!     width_m: 10.0,
//!     height_m: 6.0,
//!     floor_thickness_m: 0.5,
//!     roof_thickness_m: 0.5,
//!     wall_thickness_m: 1.0,
//!     sections: 2,
//!     soil_stiffness_kn_m3: 400.0,
//!     roof_load_kn_m2: 5.0,
//!     material: Default::default(),
//! };
//!
//! let model = build_cross_section(&params, 25.0).unwrap();
//! assert_eq!(model.nodes.len(), 20);
//! assert_eq!(model.slabs.len(), 5);
//! ```

use serde::{Deserialize, Serialize};

use super::components::{PlanarElement, StructuralNode, SubsoilSupport};
use super::loads::{
    CombinationKind, ImposedLoadCategory, LoadCase, LoadCombination, LoadGroup, SurfaceLoad,
};
use super::StructuralModel;
use crate::errors::{TunnelError, TunnelResult};
use crate::materials::ConcreteClass;
use crate::units::KiloPascals;

/// Cross-section input parameters.
///
/// All dimensions in meters, stiffness in kN/m³, load in kN/m². The host's
/// form layer delivers these already parsed; validation here is the gate
/// that guarantees no partial model can be produced from bad values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionParams {
    /// Inner-to-outer section width (m)
    pub width_m: f64,
    /// Section height (m)
    pub height_m: f64,
    /// Floor slab thickness (m)
    pub floor_thickness_m: f64,
    /// Roof slab thickness (m)
    pub roof_thickness_m: f64,
    /// Wall thickness (m)
    pub wall_thickness_m: f64,
    /// Number of tunnel tubes between the walls (walls = sections + 1)
    pub sections: usize,
    /// Subsoil bedding stiffness under the floor (kN/m³)
    pub soil_stiffness_kn_m3: f64,
    /// Downward surface load on the roof (kN/m²)
    pub roof_load_kn_m2: f64,
    /// Concrete class for all slabs
    #[serde(default)]
    pub material: ConcreteClass,
}

impl CrossSectionParams {
    /// Validate all physical parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TunnelError::InvalidParameter`] for any non-positive
    /// dimension, `sections < 1`, or slabs that cannot fit the section.
    pub fn validate(&self) -> TunnelResult<()> {
        let positives = [
            ("width_m", self.width_m),
            ("height_m", self.height_m),
            ("floor_thickness_m", self.floor_thickness_m),
            ("roof_thickness_m", self.roof_thickness_m),
            ("wall_thickness_m", self.wall_thickness_m),
            ("soil_stiffness_kn_m3", self.soil_stiffness_kn_m3),
            ("roof_load_kn_m2", self.roof_load_kn_m2),
        ];
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(TunnelError::invalid_parameter(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        if self.sections < 1 {
            return Err(TunnelError::invalid_parameter(
                "sections",
                self.sections.to_string(),
                "At least one section is required",
            ));
        }
        if self.wall_thickness_m >= self.width_m {
            return Err(TunnelError::invalid_parameter(
                "wall_thickness_m",
                self.wall_thickness_m.to_string(),
                "Walls must fit inside the section width",
            ));
        }
        if self.floor_thickness_m + self.roof_thickness_m >= self.height_m {
            return Err(TunnelError::invalid_parameter(
                "height_m",
                self.height_m.to_string(),
                "Floor and roof slabs must not overlap",
            ));
        }
        Ok(())
    }

    /// Wall center x-positions: `sections + 1` values linearly spaced over
    /// `[wall_thickness/2, width − wall_thickness/2]`, both ends inclusive.
    ///
    /// This is the single spacing formula shared by the structural model
    /// and the visualization geometry, so the two can never drift apart.
    pub fn wall_positions(&self) -> Vec<f64> {
        let lo = self.wall_thickness_m / 2.0;
        let hi = self.width_m - self.wall_thickness_m / 2.0;
        let step = (hi - lo) / self.sections as f64;
        (0..=self.sections)
            .map(|i| if i == self.sections { hi } else { lo + i as f64 * step })
            .collect()
    }

    /// z-coordinate of the floor slab mid-plane
    pub fn floor_plane_z(&self) -> f64 {
        self.floor_thickness_m / 2.0
    }

    /// z-coordinate of the roof slab mid-plane
    pub fn roof_plane_z(&self) -> f64 {
        self.height_m - self.roof_thickness_m / 2.0
    }
}

/// Names used for the single load scenario
const LOAD_GROUP: &str = "variable_loads";
const LOAD_CASE: &str = "roof_load";
const COMBINATION: &str = "sls";

/// Build the structural model for one tunnel cross-section cell.
///
/// Deterministic: identical inputs produce identical node names, ordering,
/// and coordinates. Validation happens before any node is created; on error
/// nothing is returned.
///
/// # Errors
///
/// Returns [`TunnelError::InvalidParameter`] for invalid parameters or a
/// non-positive cell length.
pub fn build_cross_section(
    params: &CrossSectionParams,
    length_m: f64,
) -> TunnelResult<StructuralModel> {
    params.validate()?;
    if length_m <= 0.0 {
        return Err(TunnelError::invalid_parameter(
            "length_m",
            length_m.to_string(),
            "Cell length must be positive",
        ));
    }

    let mut nodes = Vec::new();
    let mut slabs = Vec::new();

    // Floor and roof: rectangles over [0, width] × [0, length] at the slab
    // mid-planes, corners front-left, back-left, back-right, front-right.
    for (slab_name, z, thickness) in [
        ("floor", params.floor_plane_z(), params.floor_thickness_m),
        ("roof", params.roof_plane_z(), params.roof_thickness_m),
    ] {
        let corners = [
            (0.0, 0.0),
            (0.0, length_m),
            (params.width_m, length_m),
            (params.width_m, 0.0),
        ];
        let names = rectangle_nodes(&mut nodes, slab_name, &corners, z);
        slabs.push(PlanarElement::new(
            slab_name,
            names,
            thickness,
            params.material,
        ));
    }

    // Walls: one vertical slab per position, spanning the slab mid-planes.
    // Nodes are numbered front-bottom, front-top, back-bottom, back-top; the
    // slab winds front-bottom → back-bottom → back-top → front-top.
    let z_bottom = params.floor_plane_z();
    let z_top = params.roof_plane_z();
    for (i, x) in params.wall_positions().into_iter().enumerate() {
        let corners = [
            (0.0, z_bottom),
            (0.0, z_top),
            (length_m, z_bottom),
            (length_m, z_top),
        ];
        let mut names: [String; 4] = Default::default();
        for (j, (y, z)) in corners.into_iter().enumerate() {
            let name = format!("wall_{i}_{}", j + 1);
            nodes.push(StructuralNode::new(&name, x, y, z));
            names[j] = name;
        }
        let winding = [
            names[0].clone(),
            names[2].clone(),
            names[3].clone(),
            names[1].clone(),
        ];
        slabs.push(PlanarElement::new(
            format!("wall_{i}"),
            winding,
            params.wall_thickness_m,
            params.material,
        ));
    }

    let supports = vec![SubsoilSupport::new(
        "subsoil",
        "floor",
        params.soil_stiffness_kn_m3,
    )];

    let load_groups = vec![LoadGroup::variable(LOAD_GROUP, ImposedLoadCategory::G)];
    let load_cases = vec![LoadCase::variable_static(LOAD_CASE, LOAD_GROUP)];
    let combinations = vec![
        LoadCombination::new(COMBINATION, CombinationKind::EnvelopeServiceability)
            .with_case(LOAD_CASE, 1.0),
    ];
    let surface_loads = vec![SurfaceLoad::downward(
        "roof_pressure",
        LOAD_CASE,
        "roof",
        KiloPascals(params.roof_load_kn_m2),
    )];

    Ok(StructuralModel {
        nodes,
        slabs,
        supports,
        load_groups,
        load_cases,
        combinations,
        surface_loads,
    })
}

/// Create the 4 corner nodes of a horizontal rectangle at height `z`,
/// returning their names in winding order.
fn rectangle_nodes(
    nodes: &mut Vec<StructuralNode>,
    prefix: &str,
    corners: &[(f64, f64); 4],
    z: f64,
) -> [String; 4] {
    let mut names: [String; 4] = Default::default();
    for (j, &(x, y)) in corners.iter().enumerate() {
        let name = format!("{prefix}_{}", j + 1);
        nodes.push(StructuralNode::new(&name, x, y, z));
        names[j] = name;
    }
    names
}
