//! Host Probe port
//!
//! Queries the operating system for the facts role detection needs.

use crate::domain::entities::HostFacts;
use crate::error::DeployResult;

/// Source of the host facts snapshot
///
/// Implementations:
/// - `WindowsHostProbe` - CIM product type + service registry
/// - `SystemdHostProbe` - default target + installed units
/// - `StaticHostProbe` - facts pinned in configuration
pub trait HostProbe {
    /// Take the snapshot. Any failure is a `DeployError::RoleDetection`.
    fn probe(&self) -> DeployResult<HostFacts>;
}

impl<T: HostProbe + ?Sized> HostProbe for &T {
    fn probe(&self) -> DeployResult<HostFacts> {
        (**self).probe()
    }
}
