//! Role Policy
//!
//! Decides which optional configs apply to a host. The table below is the
//! only place role-to-config mapping lives; the catalog builds the optional
//! artifacts from it.

use crate::domain::entities::{Applicability, HostFacts, ManagedArtifact, RoleCondition, RoleService};

/// Optional, role-specific configuration fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalConfig {
    ActiveDirectory,
    Dns,
    DfsReplication,
    DfsNamespace,
}

impl OptionalConfig {
    pub fn name(self) -> &'static str {
        match self {
            OptionalConfig::ActiveDirectory => "active directory config",
            OptionalConfig::Dns => "dns config",
            OptionalConfig::DfsReplication => "dfs replication config",
            OptionalConfig::DfsNamespace => "dfs namespace config",
        }
    }
}

/// (predicate, artifact) pairs, evaluated once against the host facts.
pub const ROLE_TABLE: [(RoleCondition, OptionalConfig); 4] = [
    (RoleCondition::DomainController, OptionalConfig::ActiveDirectory),
    (RoleCondition::Service(RoleService::DnsServer), OptionalConfig::Dns),
    (
        RoleCondition::Service(RoleService::DfsReplication),
        OptionalConfig::DfsReplication,
    ),
    (
        RoleCondition::Service(RoleService::DfsNamespace),
        OptionalConfig::DfsNamespace,
    ),
];

/// Whether a single role condition holds for the host.
///
/// Does not look at server-ness; see [`is_applicable`].
pub fn condition_holds(condition: RoleCondition, facts: &HostFacts) -> bool {
    match condition {
        RoleCondition::DomainController => facts.is_domain_controller,
        RoleCondition::Service(service) => facts.has_service(service),
    }
}

/// Whether an artifact with the given applicability is in scope.
///
/// Workstations never get optional artifacts, whatever else is reported.
pub fn is_applicable(applicability: Applicability, facts: &HostFacts) -> bool {
    match applicability {
        Applicability::Always => true,
        Applicability::Role(_) if !facts.is_server => false,
        Applicability::Role(condition) => condition_holds(condition, facts),
    }
}

/// Filter a catalog down to the artifacts in scope for this host, keeping order.
pub fn select_in_scope(catalog: &[ManagedArtifact], facts: &HostFacts) -> Vec<ManagedArtifact> {
    catalog
        .iter()
        .filter(|artifact| is_applicable(artifact.applicability, facts))
        .cloned()
        .collect()
}

/// Optional configs selected for this host, in table order
pub fn selected_optional(facts: &HostFacts) -> Vec<OptionalConfig> {
    ROLE_TABLE
        .iter()
        .filter(|(condition, _)| is_applicable(Applicability::Role(*condition), facts))
        .map(|(_, config)| *config)
        .collect()
}
