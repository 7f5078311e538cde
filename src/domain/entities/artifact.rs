//! Managed Artifact Entity
//!
//! A file this tool deploys: the agent binary or one of its configs.
//! Defined once per run from the artifact catalog and never persisted.

use std::path::PathBuf;

use serde::Serialize;

use super::host_facts::RoleService;

/// What kind of file an artifact is
///
/// Binaries are compared against a shipped reference digest; configs against
/// their source copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Binary,
    Config,
}

/// Host role that makes an optional artifact applicable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCondition {
    DomainController,
    Service(RoleService),
}

/// When an artifact is in scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    Always,
    Role(RoleCondition),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedArtifact {
    /// Logical name used in logs and reports
    pub name: &'static str,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub kind: ArtifactKind,
    pub applicability: Applicability,
}

impl ManagedArtifact {
    pub fn config(
        name: &'static str,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        applicability: Applicability,
    ) -> Self {
        Self {
            name,
            source: source.into(),
            destination: destination.into(),
            kind: ArtifactKind::Config,
            applicability,
        }
    }

    pub fn binary(
        name: &'static str,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name,
            source: source.into(),
            destination: destination.into(),
            kind: ArtifactKind::Binary,
            applicability: Applicability::Always,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.applicability, Applicability::Role(_))
    }
}
