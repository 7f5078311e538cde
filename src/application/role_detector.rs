//! Role Detector
//!
//! Takes one host-facts snapshot per run and narrows the artifact catalog to
//! what applies to this host.

use crate::domain::entities::{HostFacts, ManagedArtifact};
use crate::domain::policies::{select_in_scope, selected_optional};
use crate::domain::ports::HostProbe;
use crate::error::DeployResult;

pub struct RoleDetector<P: HostProbe> {
    probe: P,
}

impl<P: HostProbe> RoleDetector<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Query the host. Failures are fatal; there is no default role.
    pub fn detect(&self) -> DeployResult<HostFacts> {
        let facts = self.probe.probe()?;
        tracing::info!(
            server = facts.is_server,
            domain_controller = facts.is_domain_controller,
            services = ?facts.services,
            "detected host roles"
        );
        Ok(facts)
    }

    /// Artifacts from `catalog` that apply to a host with these facts
    pub fn in_scope(&self, catalog: &[ManagedArtifact], facts: &HostFacts) -> Vec<ManagedArtifact> {
        let selected = selected_optional(facts);
        if !facts.is_server {
            tracing::debug!("workstation: optional configs skipped");
        } else {
            tracing::debug!(
                optional = ?selected.iter().map(|c| c.name()).collect::<Vec<_>>(),
                "optional configs selected"
            );
        }
        select_in_scope(catalog, facts)
    }
}
