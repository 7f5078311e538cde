//! Deploy Options
//!
//! Configuration types for deploy operations.

use crate::domain::ports::{ServiceIdentity, ServiceSpec};
use crate::domain::services::ArtifactLayout;
use crate::domain::value_objects::ExecutionMode;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Source and destination file layout
    pub layout: ArtifactLayout,
    /// Dry run (detect and compare, don't mutate)
    pub mode: ExecutionMode,
    /// Manage the background service at all
    pub install_service: bool,
    /// Service name and display name
    pub identity: ServiceIdentity,
}

impl DeployOptions {
    pub fn new(layout: ArtifactLayout) -> Self {
        Self {
            layout,
            mode: ExecutionMode::Normal,
            install_service: true,
            identity: ServiceIdentity::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_dry_run(self, dry_run: bool) -> Self {
        self.with_mode(ExecutionMode::from_dry_run(dry_run))
    }

    pub fn with_install_service(mut self, install: bool) -> Self {
        self.install_service = install;
        self
    }

    pub fn with_identity(mut self, identity: ServiceIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Service registration bound to the deployed binary and configs
    pub fn service_spec(&self) -> ServiceSpec {
        ServiceSpec {
            identity: self.identity.clone(),
            binary: self.layout.binary_destination(),
            config: self.layout.base_config_destination(),
            config_dir: self.layout.config_dir(),
        }
    }
}
