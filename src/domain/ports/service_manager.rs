//! Service Manager port
//!
//! Abstracts the OS service control subsystem (SCM on Windows, systemd
//! elsewhere).

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::ServiceName;
use crate::error::DeployResult;

/// Presence and running state of the managed service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    NotInstalled,
    Stopped,
    Running,
}

impl ServiceState {
    pub fn is_installed(self) -> bool {
        self != ServiceState::NotInstalled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceIdentity {
    pub name: ServiceName,
    pub display_name: String,
}

impl Default for ServiceIdentity {
    fn default() -> Self {
        Self {
            name: ServiceName::default(),
            display_name: "Telegraf".to_string(),
        }
    }
}

/// Everything needed to register the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub identity: ServiceIdentity,
    pub binary: PathBuf,
    pub config: PathBuf,
    pub config_dir: PathBuf,
}

/// Service control operations
///
/// Every mutating call either succeeds or returns `DeployError::Service`
/// naming the failed operation. Nothing is retried.
pub trait ServiceManager {
    fn query(&self, name: &ServiceName) -> DeployResult<ServiceState>;

    /// Register the service; does not start it
    fn install(&self, spec: &ServiceSpec) -> DeployResult<()>;

    fn start(&self, name: &ServiceName) -> DeployResult<()>;

    /// Stop (if running) then start
    fn restart(&self, name: &ServiceName) -> DeployResult<()>;
}

impl<T: ServiceManager + ?Sized> ServiceManager for &T {
    fn query(&self, name: &ServiceName) -> DeployResult<ServiceState> {
        (**self).query(name)
    }

    fn install(&self, spec: &ServiceSpec) -> DeployResult<()> {
        (**self).install(spec)
    }

    fn start(&self, name: &ServiceName) -> DeployResult<()> {
        (**self).start(name)
    }

    fn restart(&self, name: &ServiceName) -> DeployResult<()> {
        (**self).restart(name)
    }
}
