//! Execution mode
//!
//! Passed into every mutating operation. Read-only steps (hashing, role
//! detection, service queries) ignore it.

use serde::Serialize;

/// Whether mutations are performed or only reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    #[default]
    Normal,
    DryRun,
}

impl ExecutionMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            ExecutionMode::DryRun
        } else {
            ExecutionMode::Normal
        }
    }

    pub fn is_dry_run(self) -> bool {
        self == ExecutionMode::DryRun
    }

    /// Returns true when the mutation may go ahead.
    ///
    /// In dry-run mode the skipped action is logged instead.
    pub fn permits(self, action: &str) -> bool {
        match self {
            ExecutionMode::Normal => true,
            ExecutionMode::DryRun => {
                tracing::info!(dry_run = true, "would {}", action);
                false
            }
        }
    }
}
