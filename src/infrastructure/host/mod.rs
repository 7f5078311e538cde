//! Host Probe Implementations
//!
//! - `WindowsHostProbe` - CIM product type + role services
//! - `SystemdHostProbe` - default target + installed unit files
//! - `StaticHostProbe` - facts pinned in the configuration file

mod configured;
mod systemd;
mod windows;

pub use configured::StaticHostProbe;
pub use systemd::SystemdHostProbe;
pub use windows::WindowsHostProbe;
