//! Renderable solid geometry for the cross-section.
//!
//! Converts the same [`CrossSectionParams`](crate::model::CrossSectionParams)
//! as the structural builder into axis-aligned extruded solids for the
//! external 3D rendering kernel: the floor slab, the roof slab, and every
//! wall (the outermost spacing positions are the left and right walls).
//!
//! The wall x-positions come from the identical
//! [`wall_positions`](crate::model::CrossSectionParams::wall_positions)
//! spacing as the structural model, so the rendered geometry and the
//! analyzed geometry cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::errors::{TunnelError, TunnelResult};
use crate::materials::ConcreteClass;
use crate::model::CrossSectionParams;

/// An axis-aligned extruded box, described by its minimum corner and its
/// extents along x, y, z (m). The rendering kernel consumes these directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    /// Solid name, matching the structural slab it visualizes
    pub name: String,
    /// Concrete class, for render styling
    pub material: ConcreteClass,
    /// Minimum corner (x, y, z)
    pub corner: [f64; 3],
    /// Extents along (x, y, z)
    pub dimensions: [f64; 3],
}

impl Solid {
    /// The solid's volume (m³)
    pub fn volume_m3(&self) -> f64 {
        self.dimensions.iter().product()
    }
}

/// Build the renderable solids for one cross-section cell.
///
/// Unlike the structural slabs (which sit on mid-planes), solids have their
/// physical extents: the floor fills `[0, floor_thickness]` in z, the roof
/// `[height − roof_thickness, height]`, and walls run between the two.
///
/// # Errors
///
/// Returns [`TunnelError::InvalidParameter`] under exactly the same
/// conditions as the structural builder.
pub fn build_solids(params: &CrossSectionParams, length_m: f64) -> TunnelResult<Vec<Solid>> {
    params.validate()?;
    if length_m <= 0.0 {
        return Err(TunnelError::invalid_parameter(
            "length_m",
            length_m.to_string(),
            "Cell length must be positive",
        ));
    }

    let mut solids = Vec::with_capacity(2 + params.sections + 1);

    solids.push(Solid {
        name: "floor".to_string(),
        material: params.material,
        corner: [0.0, 0.0, 0.0],
        dimensions: [params.width_m, length_m, params.floor_thickness_m],
    });
    solids.push(Solid {
        name: "roof".to_string(),
        material: params.material,
        corner: [0.0, 0.0, params.height_m - params.roof_thickness_m],
        dimensions: [params.width_m, length_m, params.roof_thickness_m],
    });

    let wall_height =
        params.height_m - params.floor_thickness_m - params.roof_thickness_m;
    for (i, x) in params.wall_positions().into_iter().enumerate() {
        solids.push(Solid {
            name: format!("wall_{i}"),
            material: params.material,
            corner: [
                x - params.wall_thickness_m / 2.0,
                0.0,
                params.floor_thickness_m,
            ],
            dimensions: [params.wall_thickness_m, length_m, wall_height],
        });
    }

    Ok(solids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_cross_section;

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
            material: Default::default(),
        }
    }

    #[test]
    fn test_solid_count() {
        let solids = build_solids(&params(), 25.0).unwrap();
        // floor + roof + (sections + 1) walls
        assert_eq!(solids.len(), 2 + 3);
    }

    #[test]
    fn test_wall_centers_match_structural_positions() {
        let p = params();
        let solids = build_solids(&p, 25.0).unwrap();
        let centers: Vec<f64> = solids
            .iter()
            .filter(|s| s.name.starts_with("wall"))
            .map(|s| s.corner[0] + s.dimensions[0] / 2.0)
            .collect();
        assert_eq!(centers, p.wall_positions());
    }

    #[test]
    fn test_wall_names_match_structural_slabs() {
        let p = params();
        let solids = build_solids(&p, 25.0).unwrap();
        let model = build_cross_section(&p, 25.0).unwrap();
        for solid in solids.iter().filter(|s| s.name.starts_with("wall")) {
            assert!(model.slab(&solid.name).is_some(), "no slab for {}", solid.name);
        }
    }

    #[test]
    fn test_solids_fill_section_height() {
        let solids = build_solids(&params(), 25.0).unwrap();
        let floor = &solids[0];
        let roof = &solids[1];
        let wall = &solids[2];
        // Wall sits exactly between the floor top and roof underside.
        assert_eq!(wall.corner[2], floor.corner[2] + floor.dimensions[2]);
        assert_eq!(wall.corner[2] + wall.dimensions[2], roof.corner[2]);
    }

    #[test]
    fn test_volumes_positive() {
        let solids = build_solids(&params(), 25.0).unwrap();
        assert!(solids.iter().all(|s| s.volume_m3() > 0.0));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut p = params();
        p.height_m = 0.0;
        assert!(build_solids(&p, 25.0).is_err());
        assert!(build_solids(&params(), -1.0).is_err());
    }
}
