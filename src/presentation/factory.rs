//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{DeployOptions, DeployUseCase};
use crate::config::Settings;
use crate::domain::entities::HostFacts;
use crate::domain::ports::HostProbe;
use crate::error::DeployResult;
use crate::infrastructure::{DialoguerConfirmer, LocalFs, StaticHostProbe, SystemCommandRunner};

#[cfg(windows)]
use crate::infrastructure::{WindowsHostProbe, WindowsServiceManager};
#[cfg(not(windows))]
use crate::infrastructure::{SystemdHostProbe, SystemdServiceManager, DEFAULT_UNIT_DIR};

/// Probe for the running OS
#[cfg(windows)]
pub type OsHostProbe = WindowsHostProbe<SystemCommandRunner>;
#[cfg(not(windows))]
pub type OsHostProbe = SystemdHostProbe<SystemCommandRunner>;

/// Service backend for the running OS
#[cfg(windows)]
pub type PlatformServiceManager = WindowsServiceManager<SystemCommandRunner>;
#[cfg(not(windows))]
pub type PlatformServiceManager = SystemdServiceManager<LocalFs, SystemCommandRunner>;

/// Host facts from configuration when pinned, from the OS otherwise
pub enum HostSource {
    Configured(StaticHostProbe),
    Probed(OsHostProbe),
}

impl HostProbe for HostSource {
    fn probe(&self) -> DeployResult<HostFacts> {
        match self {
            HostSource::Configured(probe) => probe.probe(),
            HostSource::Probed(probe) => probe.probe(),
        }
    }
}

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<LocalFs, HostSource, PlatformServiceManager, SystemCommandRunner>;

/// Create a deploy use case with all dependencies wired up
///
/// `confirm` installs the interactive confirmation prompt.
pub fn create_deploy_use_case(settings: &Settings, confirm: bool) -> ConcreteDeployUseCase {
    let runner = SystemCommandRunner::new();
    let use_case = DeployUseCase::new(
        LocalFs::new(),
        host_source(settings, runner),
        service_manager(settings, runner),
        runner,
    );
    if confirm {
        use_case.with_confirmer(Box::new(DialoguerConfirmer))
    } else {
        use_case
    }
}

/// Deploy options for the resolved settings
pub fn deploy_options(settings: &Settings, dry_run: bool) -> DeployOptions {
    DeployOptions::new(settings.layout.clone())
        .with_dry_run(dry_run)
        .with_install_service(settings.install_service)
        .with_identity(settings.identity.clone())
}

fn host_source(settings: &Settings, runner: SystemCommandRunner) -> HostSource {
    match &settings.host {
        Some(facts) => HostSource::Configured(StaticHostProbe::new(facts.clone())),
        None => HostSource::Probed(OsHostProbe::new(runner)),
    }
}

#[cfg(windows)]
fn service_manager(_settings: &Settings, runner: SystemCommandRunner) -> PlatformServiceManager {
    WindowsServiceManager::new(runner)
}

#[cfg(not(windows))]
fn service_manager(settings: &Settings, runner: SystemCommandRunner) -> PlatformServiceManager {
    let unit_dir = settings
        .unit_dir
        .clone()
        .unwrap_or_else(|| DEFAULT_UNIT_DIR.into());
    SystemdServiceManager::new(LocalFs::new(), runner).with_unit_dir(unit_dir)
}
