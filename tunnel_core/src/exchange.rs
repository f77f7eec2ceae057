//! Analysis-worker exchange format and submission.
//!
//! The external structural-analysis worker accepts a flat, self-contained
//! payload — nodes, materials, slabs, supports, and the load administration
//! — runs a finite-element solve, and returns a report document. The worker
//! is opaque to this crate: [`AnalysisWorker`] is the seam, and [`submit`]
//! is the single synchronous call a request makes, bounded by the caller's
//! timeout.
//!
//! Enum-typed model fields flatten to their string codes here so the payload
//! is stable against refactors of the in-memory types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TunnelError, TunnelResult};
use crate::model::StructuralModel;

/// Default worker timeout (s)
pub const DEFAULT_TIMEOUT_S: u64 = 600;

/// A node in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A material in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    /// Strength class designation (e.g., "C30/37")
    pub name: String,
    /// Elastic modulus (Pa)
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density (kg/m³)
    pub rho: f64,
}

/// A planar element in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabData {
    pub name: String,
    /// Corner node names in winding order
    pub nodes: [String; 4],
    /// Thickness (m)
    pub thickness: f64,
    /// Material name
    pub material: String,
}

/// A subsoil support in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsoilData {
    pub name: String,
    /// Supported slab name
    pub element: String,
    /// Bedding stiffness (kN/m³), passed through unconverted
    pub stiffness: f64,
}

/// A load group in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadGroupData {
    pub name: String,
    /// Relation code ("standard", "exclusive", "together")
    pub relation: String,
    /// Imposed-load category letter
    pub category: String,
}

/// A load case in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseData {
    pub name: String,
    pub group: String,
    pub action: String,
    pub specification: String,
    pub duration: String,
}

/// A factored case reference inside a combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboCaseData {
    pub case: String,
    pub factor: f64,
}

/// A load combination in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationData {
    pub name: String,
    pub kind: String,
    pub cases: Vec<ComboCaseData>,
}

/// A surface load in the exchange payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLoadData {
    pub name: String,
    pub case: String,
    pub element: String,
    /// Direction of action; the cross-section check only loads along z
    pub direction: String,
    /// Signed magnitude (N/m²)
    pub magnitude: f64,
}

/// The complete, flat exchange payload for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisModel {
    pub nodes: Vec<NodeData>,
    pub materials: Vec<MaterialData>,
    pub slabs: Vec<SlabData>,
    pub subsoil_supports: Vec<SubsoilData>,
    pub load_groups: Vec<LoadGroupData>,
    pub load_cases: Vec<LoadCaseData>,
    pub combinations: Vec<CombinationData>,
    pub surface_loads: Vec<SurfaceLoadData>,
}

impl From<&StructuralModel> for AnalysisModel {
    fn from(model: &StructuralModel) -> Self {
        let nodes = model
            .nodes
            .iter()
            .map(|n| NodeData {
                name: n.name.clone(),
                x: n.x_m,
                y: n.y_m,
                z: n.z_m,
            })
            .collect();

        // One material entry per distinct class, in first-use order.
        let mut materials: Vec<MaterialData> = Vec::new();
        for slab in &model.slabs {
            let code = slab.material.code();
            if materials.iter().all(|m| m.name != code) {
                let props = slab.material.properties();
                materials.push(MaterialData {
                    name: code.to_string(),
                    e: props.e_modulus_pa,
                    nu: props.poisson_ratio,
                    rho: props.density_kg_m3,
                });
            }
        }

        let slabs = model
            .slabs
            .iter()
            .map(|s| SlabData {
                name: s.name.clone(),
                nodes: s.corner_nodes.clone(),
                thickness: s.thickness_m,
                material: s.material.code().to_string(),
            })
            .collect();

        let subsoil_supports = model
            .supports
            .iter()
            .map(|s| SubsoilData {
                name: s.name.clone(),
                element: s.element.clone(),
                stiffness: s.stiffness_kn_m3,
            })
            .collect();

        let load_groups = model
            .load_groups
            .iter()
            .map(|g| LoadGroupData {
                name: g.name.clone(),
                relation: g.relation.code().to_string(),
                category: g.category.code().to_string(),
            })
            .collect();

        let load_cases = model
            .load_cases
            .iter()
            .map(|c| LoadCaseData {
                name: c.name.clone(),
                group: c.group.clone(),
                action: c.action.code().to_string(),
                specification: c.specification.code().to_string(),
                duration: c.duration.code().to_string(),
            })
            .collect();

        let combinations = model
            .combinations
            .iter()
            .map(|c| CombinationData {
                name: c.name.clone(),
                kind: c.kind.code().to_string(),
                cases: c
                    .cases
                    .iter()
                    .map(|cf| ComboCaseData {
                        case: cf.case.clone(),
                        factor: cf.factor,
                    })
                    .collect(),
            })
            .collect();

        let surface_loads = model
            .surface_loads
            .iter()
            .map(|l| SurfaceLoadData {
                name: l.name.clone(),
                case: l.case.clone(),
                element: l.element.clone(),
                direction: "Z".to_string(),
                magnitude: l.magnitude_n_m2,
            })
            .collect();

        AnalysisModel {
            nodes,
            materials,
            slabs,
            subsoil_supports,
            load_groups,
            load_cases,
            combinations,
            surface_loads,
        }
    }
}

/// One submission to the analysis worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisJob {
    /// Request identifier, echoed in the report
    pub id: Uuid,
    /// When the job was created
    pub requested_at: DateTime<Utc>,
    /// Worker time budget (s)
    pub timeout_s: u64,
    /// The payload
    pub model: AnalysisModel,
}

impl AnalysisJob {
    /// Wrap an assembled model into a job
    pub fn new(model: &StructuralModel, timeout_s: u64) -> Self {
        AnalysisJob {
            id: Uuid::new_v4(),
            requested_at: Utc::now(),
            timeout_s,
            model: AnalysisModel::from(model),
        }
    }

    /// Serialize the job to the JSON wire form
    pub fn to_json(&self) -> TunnelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The report document the worker produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Identifier of the job this report answers
    pub job_id: Uuid,
    /// When the worker finished
    pub completed_at: DateTime<Utc>,
    /// The report document bytes (typically PDF)
    pub document: Vec<u8>,
}

/// How a worker run can go wrong, from the worker's perspective.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerFault {
    /// The time budget was exhausted before the solve finished
    TimedOut,
    /// The solve failed or the report came back incomplete
    Failed(String),
}

/// The external structural-analysis worker.
///
/// Implementations are synchronous and expected to respect the job's
/// `timeout_s` budget. The core holds no resources while a worker runs.
pub trait AnalysisWorker {
    /// Execute the solve and produce a report
    fn execute(&self, job: &AnalysisJob) -> Result<AnalysisReport, WorkerFault>;
}

/// Submit a job to a worker and map worker faults onto the error taxonomy.
///
/// A timeout or failure is terminal for this request; the core never
/// retries.
///
/// # Errors
///
/// [`TunnelError::ServiceTimeout`] when the worker exhausts the job's
/// budget, [`TunnelError::ServiceFailure`] for any other worker fault.
pub fn submit(worker: &impl AnalysisWorker, job: &AnalysisJob) -> TunnelResult<AnalysisReport> {
    worker.execute(job).map_err(|fault| match fault {
        WorkerFault::TimedOut => TunnelError::ServiceTimeout {
            timeout_s: job.timeout_s,
        },
        WorkerFault::Failed(reason) => TunnelError::service_failure(reason),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_cross_section, CrossSectionParams};

    fn sample_model() -> StructuralModel {
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

    /// Worker double that answers every job with an empty report.
    struct EchoWorker;

    impl AnalysisWorker for EchoWorker {
        fn execute(&self, job: &AnalysisJob) -> Result<AnalysisReport, WorkerFault> {
            Ok(AnalysisReport {
                job_id: job.id,
                completed_at: Utc::now(),
                document: Vec::new(),
            })
        }
    }

    struct SlowWorker;

    impl AnalysisWorker for SlowWorker {
        fn execute(&self, _job: &AnalysisJob) -> Result<AnalysisReport, WorkerFault> {
            Err(WorkerFault::TimedOut)
        }
    }

    struct BrokenWorker;

    impl AnalysisWorker for BrokenWorker {
        fn execute(&self, _job: &AnalysisJob) -> Result<AnalysisReport, WorkerFault> {
            Err(WorkerFault::Failed("singular stiffness matrix".to_string()))
        }
    }

    #[test]
    fn test_payload_mirrors_model() {
        let model = sample_model();
        let payload = AnalysisModel::from(&model);
        assert_eq!(payload.nodes.len(), model.nodes.len());
        assert_eq!(payload.slabs.len(), model.slabs.len());
        assert_eq!(payload.subsoil_supports.len(), 1);
        assert_eq!(payload.load_groups.len(), 1);
        assert_eq!(payload.load_cases.len(), 1);
        assert_eq!(payload.combinations.len(), 1);
        assert_eq!(payload.surface_loads.len(), 1);
        // All slabs share one class → one material entry.
        assert_eq!(payload.materials.len(), 1);
        assert_eq!(payload.materials[0].name, "C30/37");
    }

    #[test]
    fn test_payload_codes() {
        let payload = AnalysisModel::from(&sample_model());
        assert_eq!(payload.load_groups[0].relation, "standard");
        assert_eq!(payload.load_groups[0].category, "G");
        assert_eq!(payload.load_cases[0].action, "variable");
        assert_eq!(payload.load_cases[0].duration, "short");
        assert_eq!(payload.combinations[0].kind, "envelope_serviceability");
        assert_eq!(payload.surface_loads[0].direction, "Z");
        assert_eq!(payload.surface_loads[0].magnitude, -5000.0);
    }

    #[test]
    fn test_job_roundtrip() {
        let job = AnalysisJob::new(&sample_model(), DEFAULT_TIMEOUT_S);
        let json = job.to_json().unwrap();
        let roundtrip: AnalysisJob = serde_json::from_str(&json).unwrap();
        assert_eq!(job, roundtrip);
    }

    #[test]
    fn test_submit_echoes_job_id() {
        let job = AnalysisJob::new(&sample_model(), DEFAULT_TIMEOUT_S);
        let report = submit(&EchoWorker, &job).unwrap();
        assert_eq!(report.job_id, job.id);
        assert!(report.document.is_empty());
    }

    #[test]
    fn test_submit_maps_timeout() {
        let job = AnalysisJob::new(&sample_model(), 600);
        let err = submit(&SlowWorker, &job).unwrap_err();
        assert_eq!(err, TunnelError::ServiceTimeout { timeout_s: 600 });
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_submit_maps_failure() {
        let job = AnalysisJob::new(&sample_model(), 600);
        let err = submit(&BrokenWorker, &job).unwrap_err();
        assert_eq!(err.error_code(), "SERVICE_FAILURE");
    }
}
