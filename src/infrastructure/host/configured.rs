//! Host facts pinned by the operator in the `[host]` configuration section.

use crate::domain::entities::HostFacts;
use crate::domain::ports::HostProbe;
use crate::error::DeployResult;

#[derive(Debug, Clone)]
pub struct StaticHostProbe {
    facts: HostFacts,
}

impl StaticHostProbe {
    pub fn new(facts: HostFacts) -> Self {
        Self { facts }
    }
}

impl HostProbe for StaticHostProbe {
    fn probe(&self) -> DeployResult<HostFacts> {
        tracing::debug!("using host facts from configuration");
        Ok(self.facts.clone())
    }
}
