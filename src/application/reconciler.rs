//! Artifact Reconciler
//!
//! Decides create/update/skip for every in-scope artifact and performs the
//! copies. Works in two phases:
//!
//! 1. [`ArtifactReconciler::plan`] - existence checks and hashing only
//! 2. [`ArtifactReconciler::apply`] - directory creation and copies, gated by
//!    [`ExecutionMode`]
//!
//! The plan is identical in dry-run and normal mode, so the dry-run report
//! shows exactly what a real run would do.

use std::path::{Path, PathBuf};

use crate::domain::entities::{
    ArtifactKind, EntryKind, ManagedArtifact, ReconciliationOutcome, RunResult,
};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::ArtifactLayout;
use crate::domain::value_objects::{ContentHash, ExecutionMode};
use crate::error::DeployResult;

use super::hash_comparator::HashComparator;

pub const ROOT_DIR_NAME: &str = "install root";
pub const CONFIG_DIR_NAME: &str = "config directory";

/// One planned ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub name: String,
    /// `None` for directories
    pub source: Option<PathBuf>,
    pub destination: PathBuf,
    pub kind: EntryKind,
    pub outcome: ReconciliationOutcome,
}

impl PlannedEntry {
    fn directory(name: &str, path: &Path, outcome: ReconciliationOutcome) -> Self {
        Self {
            name: name.to_string(),
            source: None,
            destination: path.to_path_buf(),
            kind: EntryKind::Directory,
            outcome,
        }
    }

    fn artifact(artifact: &ManagedArtifact, outcome: ReconciliationOutcome) -> Self {
        Self {
            name: artifact.name.to_string(),
            source: Some(artifact.source.clone()),
            destination: artifact.destination.clone(),
            kind: artifact.kind.into(),
            outcome,
        }
    }

    /// Human description used in confirmation prompts and dry-run logs
    pub fn describe(&self) -> String {
        let verb = match (self.kind, self.outcome) {
            (_, ReconciliationOutcome::Ignored) => "keep",
            (EntryKind::Directory, _) => "create directory",
            (_, ReconciliationOutcome::Created) => "create",
            (_, ReconciliationOutcome::Updated) => "update",
        };
        format!("{} {} ({})", verb, self.destination.display(), self.name)
    }
}

/// Outcome of the read-only phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub entries: Vec<PlannedEntry>,
}

impl ReconcilePlan {
    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_change())
    }

    pub fn change_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_change()).count()
    }

    pub fn changes(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries.iter().filter(|e| e.outcome.is_change())
    }
}

pub struct ArtifactReconciler<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> ArtifactReconciler<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Classify every entry without touching the destination.
    ///
    /// Directory entries come first (root, then config directory), followed
    /// by `artifacts` in the order given.
    pub fn plan(
        &self,
        layout: &ArtifactLayout,
        artifacts: &[ManagedArtifact],
    ) -> DeployResult<ReconcilePlan> {
        let mut plan = ReconcilePlan::default();

        plan.entries.push(PlannedEntry::directory(
            ROOT_DIR_NAME,
            &layout.destination,
            self.classify_dir(&layout.destination)?,
        ));
        let config_dir = layout.config_dir();
        plan.entries.push(PlannedEntry::directory(
            CONFIG_DIR_NAME,
            &config_dir,
            self.classify_dir(&config_dir)?,
        ));

        let comparator = HashComparator::new(&self.fs);
        let reference = comparator.load_reference(&layout.digest_source())?;

        for artifact in artifacts {
            if !self.fs.exists(&artifact.source) {
                return Err(FsError::NotFound(artifact.source.clone()).into());
            }
            let outcome = match artifact.kind {
                ArtifactKind::Config => self.classify_config(&comparator, artifact)?,
                ArtifactKind::Binary => {
                    self.classify_binary(&comparator, artifact, layout, reference.as_ref())?
                }
            };
            tracing::debug!(
                artifact = artifact.name,
                destination = %artifact.destination.display(),
                ?outcome,
                "planned"
            );
            plan.entries.push(PlannedEntry::artifact(artifact, outcome));
        }

        Ok(plan)
    }

    /// Carry out a plan, recording every entry in `result`.
    ///
    /// Stops at the first failure; entries applied before it stay applied and
    /// recorded. In dry-run nothing is written but all entries are recorded.
    pub fn apply(
        &self,
        plan: &ReconcilePlan,
        mode: ExecutionMode,
        result: &mut RunResult,
    ) -> DeployResult<()> {
        for entry in &plan.entries {
            if entry.outcome.is_change() {
                self.apply_entry(entry, mode)?;
            }
            result.record(
                entry.name.clone(),
                entry.destination.clone(),
                entry.kind,
                entry.outcome,
            );
        }
        Ok(())
    }

    /// Plan and apply in one step
    pub fn reconcile(
        &self,
        layout: &ArtifactLayout,
        artifacts: &[ManagedArtifact],
        mode: ExecutionMode,
        result: &mut RunResult,
    ) -> DeployResult<ReconcilePlan> {
        let plan = self.plan(layout, artifacts)?;
        self.apply(&plan, mode, result)?;
        Ok(plan)
    }

    fn apply_entry(&self, entry: &PlannedEntry, mode: ExecutionMode) -> DeployResult<()> {
        if !mode.permits(&entry.describe()) {
            return Ok(());
        }
        match (&entry.source, entry.kind) {
            (_, EntryKind::Directory) => {
                self.fs.create_dir_all(&entry.destination)?;
                tracing::info!(path = %entry.destination.display(), "created directory");
            }
            (Some(source), _) => {
                self.fs.copy_file(source, &entry.destination)?;
                tracing::info!(
                    artifact = %entry.name,
                    destination = %entry.destination.display(),
                    outcome = ?entry.outcome,
                    "copied"
                );
            }
            (None, _) => {}
        }
        Ok(())
    }

    fn classify_dir(&self, path: &Path) -> DeployResult<ReconciliationOutcome> {
        if self.fs.is_dir(path) {
            Ok(ReconciliationOutcome::Ignored)
        } else if self.fs.exists(path) {
            Err(FsError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other("exists but is not a directory"),
            }
            .into())
        } else {
            Ok(ReconciliationOutcome::Created)
        }
    }

    fn classify_config(
        &self,
        comparator: &HashComparator<'_, FS>,
        artifact: &ManagedArtifact,
    ) -> DeployResult<ReconciliationOutcome> {
        if !self.fs.exists(&artifact.destination) {
            return Ok(ReconciliationOutcome::Created);
        }
        if comparator.files_match(&artifact.source, &artifact.destination)? {
            Ok(ReconciliationOutcome::Ignored)
        } else {
            Ok(ReconciliationOutcome::Updated)
        }
    }

    fn classify_binary(
        &self,
        comparator: &HashComparator<'_, FS>,
        artifact: &ManagedArtifact,
        layout: &ArtifactLayout,
        reference: Option<&ContentHash>,
    ) -> DeployResult<ReconciliationOutcome> {
        let outcome = if !self.fs.exists(&artifact.destination) {
            ReconciliationOutcome::Created
        } else {
            let reference = match reference {
                Some(reference) => reference.clone(),
                None => comparator.require_reference(&layout.digest_source())?,
            };
            if comparator.matches_reference(&artifact.destination, &reference)? {
                ReconciliationOutcome::Ignored
            } else {
                ReconciliationOutcome::Updated
            }
        };

        if outcome.is_change() {
            match reference {
                Some(reference) => comparator.verify_integrity(&artifact.source, reference)?,
                None => tracing::warn!(
                    digest = %layout.digest_source().display(),
                    "reference digest missing; deploying agent binary without integrity check"
                ),
            }
        }
        Ok(outcome)
    }
}
