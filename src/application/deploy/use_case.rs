//! Deploy Use Case
//!
//! Orchestrates one deployment run:
//! 1. Detect host roles and select the artifacts in scope
//! 2. Plan reconciliation (read-only)
//! 3. Query the service state
//! 4. Ask for confirmation (if configured)
//! 5. Apply the plan
//! 6. Validate the deployed configuration (if anything changed, or the
//!    service is about to be installed)
//! 7. Activate the service on a valid configuration
//!
//! All business rules live in the domain and the per-step components; this
//! use case only sequences them.

use crate::domain::entities::{RunResult, ServiceAction, ValidationOutcome};
use crate::domain::ports::{
    CommandRunner, Confirmer, FileSystem, HostProbe, ServiceManager, ServiceState,
};
use crate::domain::value_objects::ServiceName;
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use crate::application::activator::ServiceActivator;
use crate::application::reconciler::{ArtifactReconciler, ReconcilePlan};
use crate::application::role_detector::RoleDetector;
use crate::application::validator::ConfigurationValidator;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can drive it with in-memory mocks.
pub struct DeployUseCase<FS, HP, SM, R>
where
    FS: FileSystem,
    HP: HostProbe,
    SM: ServiceManager,
    R: CommandRunner,
{
    file_system: FS,
    host_probe: HP,
    services: SM,
    runner: R,
    confirmer: Option<Box<dyn Confirmer>>,
}

impl<FS, HP, SM, R> DeployUseCase<FS, HP, SM, R>
where
    FS: FileSystem,
    HP: HostProbe,
    SM: ServiceManager,
    R: CommandRunner,
{
    pub fn new(file_system: FS, host_probe: HP, services: SM, runner: R) -> Self {
        Self {
            file_system,
            host_probe,
            services,
            runner,
            confirmer: None,
        }
    }

    /// Ask once, before the first mutation
    pub fn with_confirmer(mut self, confirmer: Box<dyn Confirmer>) -> Self {
        self.confirmer = Some(confirmer);
        self
    }

    /// Execute the deploy use case
    ///
    /// Returns `Ok` with `validation == Invalid` when the agent rejected the
    /// configuration; the caller decides how to surface that.
    pub fn execute(&self, options: &DeployOptions) -> DeployResult<RunResult> {
        let mode = options.mode;
        let mut result = RunResult::new(mode);

        // 1. Roles
        let detector = RoleDetector::new(&self.host_probe);
        let facts = detector.detect()?;
        let in_scope = detector.in_scope(&options.layout.catalog(), &facts);
        result.host = Some(facts);

        // 2. Plan
        let reconciler = ArtifactReconciler::new(&self.file_system);
        let plan = reconciler.plan(&options.layout, &in_scope)?;
        tracing::info!(
            entries = plan.entries.len(),
            changes = plan.change_count(),
            "reconciliation planned"
        );

        // 3. Service state
        let activator = ServiceActivator::new(&self.services);
        let spec = options.service_spec();
        let state = if options.install_service {
            Some(activator.query(&spec)?)
        } else {
            tracing::debug!("service management disabled");
            None
        };
        let needs_install = state == Some(ServiceState::NotInstalled);
        let has_work = plan.has_changes() || needs_install;

        // 4. Confirm
        if has_work && !mode.is_dry_run() {
            self.confirm(&plan, needs_install.then_some(&spec.identity.name))?;
        }

        // 5. Apply
        reconciler.apply(&plan, mode, &mut result)?;

        // 6. Validate
        result.validation = if has_work {
            ConfigurationValidator::new(&self.runner).validate(&options.layout, mode)?
        } else {
            tracing::info!("no changes; skipping configuration test");
            ValidationOutcome::Skipped
        };

        // 7. Activate
        result.service_action = match (state, result.validation) {
            (None, _) => ServiceAction::Disabled,
            (Some(_), ValidationOutcome::Invalid { .. }) => {
                tracing::error!("configuration rejected; service left untouched");
                ServiceAction::None
            }
            (Some(state), ValidationOutcome::Valid) => activator.activate(&spec, state, mode)?,
            (Some(state), ValidationOutcome::Skipped) if has_work => {
                activator.activate(&spec, state, mode)?
            }
            (Some(_), ValidationOutcome::Skipped) => ServiceAction::None,
        };
        result.service_planned = mode.is_dry_run()
            && matches!(
                result.service_action,
                ServiceAction::Installed | ServiceAction::Restarted
            );

        result.finish();
        Ok(result)
    }

    fn confirm(
        &self,
        plan: &ReconcilePlan,
        install: Option<&ServiceName>,
    ) -> DeployResult<()> {
        let Some(confirmer) = &self.confirmer else {
            return Ok(());
        };

        let mut prompt = String::from("The following changes will be made:\n");
        for entry in plan.changes() {
            prompt.push_str(&format!("  - {}\n", entry.describe()));
        }
        if let Some(name) = install {
            prompt.push_str(&format!("  - install service '{}'\n", name));
        }
        prompt.push_str("Proceed?");

        if confirmer.confirm(&prompt)? {
            Ok(())
        } else {
            tracing::warn!("deployment declined at confirmation prompt");
            Err(DeployError::Aborted)
        }
    }
}
