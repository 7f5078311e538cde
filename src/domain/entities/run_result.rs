//! Run Result
//!
//! The single accumulator a deploy run writes into: per-entry outcomes,
//! validation outcome and the service action. Used only for reporting.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::artifact::ArtifactKind;
use super::host_facts::HostFacts;
use crate::domain::value_objects::ExecutionMode;

/// Outcome of reconciling one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationOutcome {
    Created,
    Updated,
    Ignored,
}

impl ReconciliationOutcome {
    pub fn is_change(self) -> bool {
        !matches!(self, ReconciliationOutcome::Ignored)
    }
}

/// What a ledger entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    Binary,
    Config,
}

impl From<ArtifactKind> for EntryKind {
    fn from(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Binary => EntryKind::Binary,
            ArtifactKind::Config => EntryKind::Config,
        }
    }
}

/// One line of the reconciliation ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: ReconciliationOutcome,
}

/// Created/updated/ignored counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub created: usize,
    pub updated: usize,
    pub ignored: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: ReconciliationOutcome) {
        match outcome {
            ReconciliationOutcome::Created => self.created += 1,
            ReconciliationOutcome::Updated => self.updated += 1,
            ReconciliationOutcome::Ignored => self.ignored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.updated + self.ignored
    }

    pub fn changes(&self) -> usize {
        self.created + self.updated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Not run: nothing changed, or dry-run
    #[default]
    Skipped,
    Valid,
    Invalid { code: Option<i32> },
}

/// Service transition taken (or planned, in dry-run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAction {
    /// Service present and nothing to activate, or activation halted
    #[default]
    None,
    /// Installed and started
    Installed,
    Restarted,
    /// Service management turned off
    Disabled,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub mode: ExecutionMode,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub host: Option<HostFacts>,
    pub tally: Tally,
    pub entries: Vec<ReconcileEntry>,
    pub validation: ValidationOutcome,
    pub service_action: ServiceAction,
    /// Set in dry-run: `service_action` is what would have happened
    pub service_planned: bool,
}

impl RunResult {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            started_at: Utc::now(),
            finished_at: None,
            host: None,
            tally: Tally::default(),
            entries: Vec::new(),
            validation: ValidationOutcome::Skipped,
            service_action: ServiceAction::None,
            service_planned: false,
        }
    }

    /// Record one reconciled entry in both the ledger and the tally
    pub fn record(
        &mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        kind: EntryKind,
        outcome: ReconciliationOutcome,
    ) {
        self.tally.record(outcome);
        self.entries.push(ReconcileEntry {
            name: name.into(),
            path: path.into(),
            kind,
            outcome,
        });
    }

    pub fn has_changes(&self) -> bool {
        self.tally.changes() > 0
    }

    /// Totals as reported: a service install counts as one more creation.
    pub fn reported_tally(&self) -> Tally {
        let mut tally = self.tally;
        if self.service_action == ServiceAction::Installed {
            tally.created += 1;
        }
        tally
    }

    pub fn is_success(&self) -> bool {
        !matches!(self.validation, ValidationOutcome::Invalid { .. })
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome() {
        let mut tally = Tally::default();
        tally.record(ReconciliationOutcome::Created);
        tally.record(ReconciliationOutcome::Ignored);
        tally.record(ReconciliationOutcome::Ignored);
        tally.record(ReconciliationOutcome::Updated);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.changes(), 2);
    }

    #[test]
    fn record_keeps_ledger_and_tally_in_step() {
        let mut result = RunResult::new(ExecutionMode::Normal);
        result.record("root", "/opt/telegraf", EntryKind::Directory, ReconciliationOutcome::Ignored);
        result.record("base config", "/opt/telegraf/telegraf.conf", EntryKind::Config, ReconciliationOutcome::Updated);
        assert_eq!(result.entries.len(), result.tally.total());
        assert!(result.has_changes());
    }

    #[test]
    fn service_install_counts_as_created_in_report() {
        let mut result = RunResult::new(ExecutionMode::Normal);
        result.service_action = ServiceAction::Installed;
        assert_eq!(result.tally.created, 0);
        assert_eq!(result.reported_tally().created, 1);
    }

    #[test]
    fn invalid_validation_is_failure() {
        let mut result = RunResult::new(ExecutionMode::Normal);
        assert!(result.is_success());
        result.validation = ValidationOutcome::Invalid { code: Some(1) };
        assert!(!result.is_success());
    }
}
