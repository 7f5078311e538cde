//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `HashComparator` - digest comparison and integrity checks
//! - `ArtifactReconciler` - plan/apply create, update or skip per artifact
//! - `RoleDetector` - host facts snapshot and artifact selection
//! - `ConfigurationValidator` - agent `--test` run against the deployed tree
//! - `ServiceActivator` - install+start or restart
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Orchestrates the whole run

pub mod activator;
pub mod deploy;
pub mod hash_comparator;
pub mod reconciler;
pub mod role_detector;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use activator::ServiceActivator;
pub use deploy::{DeployOptions, DeployUseCase};
pub use hash_comparator::HashComparator;
pub use reconciler::{ArtifactReconciler, PlannedEntry, ReconcilePlan};
pub use role_detector::RoleDetector;
pub use validator::ConfigurationValidator;
