//! Load administration for the cross-section model.
//!
//! The structural check uses a deliberately minimal scenario: one variable
//! load group, one static short-duration load case in it, one
//! serviceability-envelope combination, and one downward surface load on the
//! roof slab. The types are nevertheless general enough to serialize into
//! the analysis exchange format unchanged.

use serde::{Deserialize, Serialize};

use crate::units::{KiloPascals, Pascals};

/// How the load cases inside one group relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadGroupRelation {
    /// Cases may act together or alone, whichever governs
    Standard,
    /// At most one case of the group acts at a time
    Exclusive,
    /// All cases of the group always act together
    Together,
}

impl LoadGroupRelation {
    /// Short code used in exchange payloads
    pub fn code(&self) -> &'static str {
        match self {
            LoadGroupRelation::Standard => "standard",
            LoadGroupRelation::Exclusive => "exclusive",
            LoadGroupRelation::Together => "together",
        }
    }
}

/// Imposed-load category per EN 1991-1-1 Table 6.1/6.2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImposedLoadCategory {
    /// A - domestic and residential
    A,
    /// B - office areas
    B,
    /// C - congregation areas
    C,
    /// D - shopping areas
    D,
    /// E - storage areas
    E,
    /// F - light traffic (vehicle weight ≤ 30 kN)
    F,
    /// G - traffic areas, 30 kN < vehicle weight ≤ 160 kN
    G,
    /// H - roofs not accessible except for maintenance
    H,
}

impl ImposedLoadCategory {
    /// The category letter
    pub fn code(&self) -> &'static str {
        match self {
            ImposedLoadCategory::A => "A",
            ImposedLoadCategory::B => "B",
            ImposedLoadCategory::C => "C",
            ImposedLoadCategory::D => "D",
            ImposedLoadCategory::E => "E",
            ImposedLoadCategory::F => "F",
            ImposedLoadCategory::G => "G",
            ImposedLoadCategory::H => "H",
        }
    }
}

/// A group of related load cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadGroup {
    /// Unique group name
    pub name: String,
    /// Relation between the group's cases
    pub relation: LoadGroupRelation,
    /// Imposed-load category of the group's variable loads
    pub category: ImposedLoadCategory,
}

impl LoadGroup {
    /// Create a variable load group with the standard relation
    pub fn variable(name: impl Into<String>, category: ImposedLoadCategory) -> Self {
        LoadGroup {
            name: name.into(),
            relation: LoadGroupRelation::Standard,
            category,
        }
    }
}

/// Load case action type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadCaseAction {
    /// Always present (self weight, earth cover)
    Permanent,
    /// May or may not be present (traffic, maintenance)
    Variable,
}

impl LoadCaseAction {
    /// Short code used in exchange payloads
    pub fn code(&self) -> &'static str {
        match self {
            LoadCaseAction::Permanent => "permanent",
            LoadCaseAction::Variable => "variable",
        }
    }
}

/// What the load case describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadCaseSpecification {
    /// Plain applied loads
    Standard,
    /// Temperature action
    Temperature,
    /// Automatically generated self weight
    SelfWeight,
}

impl LoadCaseSpecification {
    /// Short code used in exchange payloads
    pub fn code(&self) -> &'static str {
        match self {
            LoadCaseSpecification::Standard => "standard",
            LoadCaseSpecification::Temperature => "temperature",
            LoadCaseSpecification::SelfWeight => "self_weight",
        }
    }
}

/// Characteristic duration of a variable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadDuration {
    Short,
    Medium,
    Long,
}

impl LoadDuration {
    /// Short code used in exchange payloads
    pub fn code(&self) -> &'static str {
        match self {
            LoadDuration::Short => "short",
            LoadDuration::Medium => "medium",
            LoadDuration::Long => "long",
        }
    }
}

/// A static load case under a load group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Unique case name
    pub name: String,
    /// Owning load group name
    pub group: String,
    pub action: LoadCaseAction,
    pub specification: LoadCaseSpecification,
    pub duration: LoadDuration,
}

impl LoadCase {
    /// Create a variable static load case with standard specification and
    /// short duration — the scenario the cross-section check uses.
    pub fn variable_static(name: impl Into<String>, group: impl Into<String>) -> Self {
        LoadCase {
            name: name.into(),
            group: group.into(),
            action: LoadCaseAction::Variable,
            specification: LoadCaseSpecification::Standard,
            duration: LoadDuration::Short,
        }
    }
}

/// Combination evaluation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombinationKind {
    /// Envelope over case permutations, ultimate limit state
    EnvelopeUltimate,
    /// Envelope over case permutations, serviceability limit state
    EnvelopeServiceability,
    /// Plain factored sum
    Linear,
}

impl CombinationKind {
    /// Short code used in exchange payloads
    pub fn code(&self) -> &'static str {
        match self {
            CombinationKind::EnvelopeUltimate => "envelope_ultimate",
            CombinationKind::EnvelopeServiceability => "envelope_serviceability",
            CombinationKind::Linear => "linear",
        }
    }
}

/// A factored load case inside a combination.
///
/// Stored as an ordered list (not a map) so that exchange payloads are
/// reproduced bit-for-bit between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFactor {
    /// Load case name
    pub case: String,
    /// Multiplication factor
    pub factor: f64,
}

/// A load combination over named cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Unique combination name
    pub name: String,
    pub kind: CombinationKind,
    /// Ordered factored cases
    pub cases: Vec<CaseFactor>,
}

impl LoadCombination {
    /// Create a combination with no cases yet
    pub fn new(name: impl Into<String>, kind: CombinationKind) -> Self {
        LoadCombination {
            name: name.into(),
            kind,
            cases: Vec::new(),
        }
    }

    /// Add a factored case (builder pattern)
    pub fn with_case(mut self, case: impl Into<String>, factor: f64) -> Self {
        self.cases.push(CaseFactor {
            case: case.into(),
            factor,
        });
        self
    }

    /// Get the factor for a case (0.0 if the case is not in the combination)
    pub fn factor_for(&self, case: &str) -> f64 {
        self.cases
            .iter()
            .find(|cf| cf.case == case)
            .map_or(0.0, |cf| cf.factor)
    }
}

/// A distributed force over a slab's area, acting along the global z axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLoad {
    /// Unique load name
    pub name: String,
    /// Load case the force belongs to
    pub case: String,
    /// Loaded slab name
    pub element: String,
    /// Signed magnitude along +z (N/m²); downward loads are negative
    pub magnitude_n_m2: f64,
}

impl SurfaceLoad {
    /// Create a downward surface load from a user-facing kN/m² magnitude.
    ///
    /// This is the one unit conversion the model performs: kN/m² → N/m²,
    /// negated because the force acts against +z.
    pub fn downward(
        name: impl Into<String>,
        case: impl Into<String>,
        element: impl Into<String>,
        pressure: KiloPascals,
    ) -> Self {
        SurfaceLoad {
            name: name.into(),
            case: case.into(),
            element: element.into(),
            magnitude_n_m2: -Pascals::from(pressure).value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_group_defaults() {
        let group = LoadGroup::variable("variable_loads", ImposedLoadCategory::G);
        assert_eq!(group.relation, LoadGroupRelation::Standard);
        assert_eq!(group.category.code(), "G");
    }

    #[test]
    fn test_variable_static_case() {
        let case = LoadCase::variable_static("roof_load", "variable_loads");
        assert_eq!(case.action, LoadCaseAction::Variable);
        assert_eq!(case.specification, LoadCaseSpecification::Standard);
        assert_eq!(case.duration, LoadDuration::Short);
        assert_eq!(case.group, "variable_loads");
    }

    #[test]
    fn test_combination_factors() {
        let combo = LoadCombination::new("sls", CombinationKind::EnvelopeServiceability)
            .with_case("roof_load", 1.0);
        assert_eq!(combo.factor_for("roof_load"), 1.0);
        assert_eq!(combo.factor_for("unknown"), 0.0);
    }

    #[test]
    fn test_downward_surface_load_converts_kn_to_n() {
        let load = SurfaceLoad::downward("roof_pressure", "roof_load", "roof", KiloPascals(5.0));
        assert_eq!(load.magnitude_n_m2, -5000.0);
    }

    #[test]
    fn test_combination_order_is_stable() {
        let combo = LoadCombination::new("sls", CombinationKind::EnvelopeServiceability)
            .with_case("a", 1.0)
            .with_case("b", 0.5);
        let json = serde_json::to_string(&combo).unwrap();
        let roundtrip: LoadCombination = serde_json::from_str(&json).unwrap();
        assert_eq!(combo, roundtrip);
        assert_eq!(roundtrip.cases[0].case, "a");
        assert_eq!(roundtrip.cases[1].case, "b");
    }
}
