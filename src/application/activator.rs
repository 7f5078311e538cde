//! Service Activator
//!
//! Moves the service to Installed-Running after a successful validation:
//! absent services are installed then started, present ones restarted.

use crate::domain::entities::ServiceAction;
use crate::domain::ports::{ServiceManager, ServiceSpec, ServiceState};
use crate::domain::value_objects::ExecutionMode;
use crate::error::DeployResult;

pub struct ServiceActivator<S: ServiceManager> {
    services: S,
}

impl<S: ServiceManager> ServiceActivator<S> {
    pub fn new(services: S) -> Self {
        Self { services }
    }

    /// Read-only; also runs in dry-run
    pub fn query(&self, spec: &ServiceSpec) -> DeployResult<ServiceState> {
        let state = self.services.query(&spec.identity.name)?;
        tracing::debug!(service = %spec.identity.name, ?state, "queried service");
        Ok(state)
    }

    /// Perform the transition for `state`, returning the action taken (or,
    /// in dry-run, the action that would be taken).
    pub fn activate(
        &self,
        spec: &ServiceSpec,
        state: ServiceState,
        mode: ExecutionMode,
    ) -> DeployResult<ServiceAction> {
        let name = &spec.identity.name;
        match state {
            ServiceState::NotInstalled => {
                if mode.permits(&format!("install and start service '{}'", name)) {
                    self.services.install(spec)?;
                    tracing::info!(service = %name, binary = %spec.binary.display(), "installed service");
                    self.services.start(name)?;
                    tracing::info!(service = %name, "started service");
                }
                Ok(ServiceAction::Installed)
            }
            ServiceState::Stopped | ServiceState::Running => {
                if mode.permits(&format!("restart service '{}'", name)) {
                    self.services.restart(name)?;
                    tracing::info!(service = %name, was = ?state, "restarted service");
                }
                Ok(ServiceAction::Restarted)
            }
        }
    }
}
