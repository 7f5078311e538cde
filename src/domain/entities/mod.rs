//! Domain Entities
//!
//! - `ManagedArtifact` - A file deployed to the host
//! - `HostFacts` - Role snapshot of the host
//! - `RunResult` - Accumulated outcomes of one run

mod artifact;
mod host_facts;
mod run_result;

pub use artifact::{Applicability, ArtifactKind, ManagedArtifact, RoleCondition};
pub use host_facts::{HostFacts, RoleService};
pub use run_result::{
    EntryKind, ReconcileEntry, ReconciliationOutcome, RunResult, ServiceAction, Tally,
    ValidationOutcome,
};
