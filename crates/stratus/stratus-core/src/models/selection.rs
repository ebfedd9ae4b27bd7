use serde::{Deserialize, Serialize};

use super::component::{ComplianceNote, Component, SecurityControl};
use crate::errors::StratusResult;

/// Fixed entry chain, in traffic order.
pub const INGRESS_CHAIN: [Component; 3] = [Component::Dns, Component::Cdn, Component::LoadBalancer];

/// The authoritative set of component choices for one design.
///
/// Built once by the selector and read by every downstream subsystem.
/// Fields are private so a selection cannot change after it is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchitectureSelection {
    ingress: Vec<Component>,
    compute: Component,
    database: Component,
    cache: Component,
    queue: Option<Component>,
    stream: Option<Component>,
    object_storage: Component,
    security_stack: Vec<SecurityControl>,
    compliance_notes: Vec<ComplianceNote>,
}

impl ArchitectureSelection {
    /// Assemble a selection from the variable choices; the fixed parts
    /// (ingress chain, object storage, security stack, compliance notes)
    /// are filled with their baselines.
    pub fn new(
        compute: Component,
        database: Component,
        cache: Component,
        queue: Option<Component>,
        stream: Option<Component>,
    ) -> Self {
        Self {
            ingress: INGRESS_CHAIN.to_vec(),
            compute,
            database,
            cache,
            queue,
            stream,
            object_storage: Component::ObjectStore,
            security_stack: SecurityControl::BASELINE.to_vec(),
            compliance_notes: ComplianceNote::BASELINE.to_vec(),
        }
    }

    /// Same selection with a different security stack.
    pub fn with_security_stack(mut self, controls: Vec<SecurityControl>) -> Self {
        self.security_stack = controls;
        self
    }

    pub fn ingress(&self) -> &[Component] {
        &self.ingress
    }

    pub fn compute(&self) -> Component {
        self.compute
    }

    pub fn database(&self) -> Component {
        self.database
    }

    pub fn cache(&self) -> Component {
        self.cache
    }

    pub fn queue(&self) -> Option<Component> {
        self.queue
    }

    pub fn stream(&self) -> Option<Component> {
        self.stream
    }

    pub fn object_storage(&self) -> Component {
        self.object_storage
    }

    pub fn security_stack(&self) -> &[SecurityControl] {
        &self.security_stack
    }

    pub fn compliance_notes(&self) -> &[ComplianceNote] {
        &self.compliance_notes
    }

    pub fn has_control(&self, control: SecurityControl) -> bool {
        self.security_stack.contains(&control)
    }

    /// Every selected component in node order: ingress chain, compute,
    /// database, cache, queue, stream, object storage.
    pub fn components(&self) -> Vec<Component> {
        let mut out = self.ingress.clone();
        out.extend([self.compute, self.database, self.cache]);
        out.extend(self.queue);
        out.extend(self.stream);
        out.push(self.object_storage);
        out
    }

    /// blake3 hex digest of the canonical JSON form.
    ///
    /// Identical selections always produce identical fingerprints.
    pub fn fingerprint(&self) -> StratusResult<String> {
        let serialized = serde_json::to_string(self)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }
}
