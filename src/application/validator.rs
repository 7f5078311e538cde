//! Configuration Validator
//!
//! Runs the deployed agent in test mode against the deployed configuration
//! tree and maps its exit status to a [`ValidationOutcome`].

use crate::domain::entities::ValidationOutcome;
use crate::domain::ports::{CommandRunner, CommandSpec};
use crate::domain::services::ArtifactLayout;
use crate::domain::value_objects::ExecutionMode;
use crate::error::{DeployError, DeployResult};

/// Lines of agent stderr carried into the failure warning
const STDERR_TAIL_LINES: usize = 5;

pub struct ConfigurationValidator<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ConfigurationValidator<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `<binary> --config <base> --config-directory <dir> --test`
    pub fn command(layout: &ArtifactLayout) -> CommandSpec {
        CommandSpec::new(layout.binary_destination())
            .arg("--config")
            .arg(layout.base_config_destination())
            .arg("--config-directory")
            .arg(layout.config_dir())
            .arg("--test")
    }

    /// Test the deployed tree.
    ///
    /// In dry-run the agent is not invoked and the outcome is `Skipped`.
    /// A spawn failure is an error; a nonzero exit is `Invalid`.
    pub fn validate(
        &self,
        layout: &ArtifactLayout,
        mode: ExecutionMode,
    ) -> DeployResult<ValidationOutcome> {
        let command = Self::command(layout);
        if !mode.permits(&format!("test configuration with `{}`", command)) {
            return Ok(ValidationOutcome::Skipped);
        }

        tracing::debug!(%command, "testing configuration");
        let output = self
            .runner
            .run(&command)
            .map_err(|source| DeployError::Spawn {
                program: command.program.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            tracing::trace!(target: "agent", "{}", stdout.trim_end());
        }
        if !stderr.trim().is_empty() {
            tracing::trace!(target: "agent", "{}", stderr.trim_end());
        }

        if output.status.success() {
            tracing::info!("configuration test passed");
            return Ok(ValidationOutcome::Valid);
        }

        let code = output.status.code();
        tracing::warn!(
            code = ?code,
            stderr = %tail(&stderr, STDERR_TAIL_LINES),
            "configuration test failed"
        );
        Ok(ValidationOutcome::Invalid { code })
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    all[all.len().saturating_sub(lines)..].join(" | ")
}
