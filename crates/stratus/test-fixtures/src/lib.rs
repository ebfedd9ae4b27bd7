//! Test fixture loader for Stratus golden scenarios, plus shared builders
//! for selections and score vectors used across crate tests and benches.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use stratus_core::{
    ArchitectureSelection, Component, FocusCategory, ObservationKind, RiskLevel, ScoreVector,
};

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// A full design request with the outputs it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Canonical order: latency, load, cost, performance, security, scale.
    pub scores: [i64; 6],
    pub focus: String,
    pub use_case: String,
    pub expected: ScenarioExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    pub compute: Component,
    pub database: Component,
    pub cache: Component,
    pub queue: Option<Component>,
    pub stream: Option<Component>,
    pub risk: f64,
    pub risk_level: RiskLevel,
    pub observation_kinds: Vec<ObservationKind>,
    pub node_count: usize,
    pub edge_count: usize,
}

impl Scenario {
    pub fn score_vector(&self) -> ScoreVector {
        ScoreVector::from(self.scores)
    }

    pub fn focus_category(&self) -> FocusCategory {
        FocusCategory::from_label(&self.focus)
    }

    /// The reasoning context the engine builds: use case, a space, the focus label.
    pub fn context(&self) -> String {
        format!("{} {}", self.use_case, self.focus)
    }
}

/// All golden scenarios.
pub fn scenarios() -> Vec<Scenario> {
    load_fixture("scenarios.json")
}

/// A score vector and the risk it must produce. Most of these land on a
/// half-way tenth before rounding.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskCase {
    pub name: String,
    /// Canonical order: latency, load, cost, performance, security, scale.
    pub scores: [i64; 6],
    pub risk: f64,
}

impl RiskCase {
    pub fn score_vector(&self) -> ScoreVector {
        ScoreVector::from(self.scores)
    }
}

/// Risk values for half-way and tie inputs.
pub fn risk_cases() -> Vec<RiskCase> {
    load_fixture("risk_cases.json")
}

/// Selection with every optional component present and the distributed cache.
pub fn full_selection() -> ArchitectureSelection {
    ArchitectureSelection::new(
        Component::ContainerCompute,
        Component::RelationalDbHa,
        Component::DistributedCache,
        Some(Component::AsyncQueue),
        Some(Component::StreamIngestion),
    )
}

/// Selection with no optional components and the local cache.
pub fn minimal_selection() -> ArchitectureSelection {
    ArchitectureSelection::new(
        Component::ServerlessCompute,
        Component::RelationalDbStandard,
        Component::LocalCache,
        None,
        None,
    )
}

/// Queue present, stream absent.
pub fn queue_only_selection() -> ArchitectureSelection {
    ArchitectureSelection::new(
        Component::ContainerCompute,
        Component::RelationalDbHa,
        Component::DistributedCache,
        Some(Component::AsyncQueue),
        None,
    )
}

/// Every combination of compute, database, cache, queue and stream choice.
pub fn all_selections() -> Vec<ArchitectureSelection> {
    let mut out = Vec::new();
    for compute in [Component::ContainerCompute, Component::ServerlessCompute] {
        for database in [Component::RelationalDbHa, Component::RelationalDbStandard] {
            for cache in [Component::DistributedCache, Component::LocalCache] {
                for queue in [Some(Component::AsyncQueue), None] {
                    for stream in [Some(Component::StreamIngestion), None] {
                        out.push(ArchitectureSelection::new(compute, database, cache, queue, stream));
                    }
                }
            }
        }
    }
    out
}
