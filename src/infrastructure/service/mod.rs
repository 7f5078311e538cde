//! Service Manager Implementations
//!
//! - `WindowsServiceManager` - SCM via the agent installer, `sc.exe` and PowerShell
//! - `SystemdServiceManager` - unit file + `systemctl`

mod systemd;
mod windows;

pub use systemd::{SystemdServiceManager, DEFAULT_UNIT_DIR};
pub use windows::WindowsServiceManager;
