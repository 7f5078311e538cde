//! Host Facts Entity
//!
//! Snapshot of the host roles relevant to artifact selection. Taken once per
//! run, read-only afterwards.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// OS role services that bring their own monitoring config
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleService {
    DnsServer,
    DfsReplication,
    DfsNamespace,
}

impl RoleService {
    pub const ALL: [RoleService; 3] = [
        RoleService::DnsServer,
        RoleService::DfsReplication,
        RoleService::DfsNamespace,
    ];

    /// Windows service key name
    pub fn windows_service_name(self) -> &'static str {
        match self {
            RoleService::DnsServer => "DNS",
            RoleService::DfsReplication => "DFSR",
            RoleService::DfsNamespace => "Dfs",
        }
    }

    pub fn from_windows_service_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.windows_service_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for RoleService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoleService::DnsServer => "DNS Server",
            RoleService::DfsReplication => "DFS Replication",
            RoleService::DfsNamespace => "DFS Namespace",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostFacts {
    pub is_server: bool,
    pub is_domain_controller: bool,
    pub services: BTreeSet<RoleService>,
}

impl HostFacts {
    pub fn workstation() -> Self {
        Self::default()
    }

    pub fn server() -> Self {
        Self {
            is_server: true,
            ..Self::default()
        }
    }

    pub fn with_domain_controller(mut self, is_dc: bool) -> Self {
        self.is_domain_controller = is_dc;
        self
    }

    pub fn with_service(mut self, service: RoleService) -> Self {
        self.services.insert(service);
        self
    }

    pub fn has_service(&self, service: RoleService) -> bool {
        self.services.contains(&service)
    }
}
