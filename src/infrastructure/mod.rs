//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `host/` - Host probes (Windows, systemd, configured)
//! - `service/` - Service managers (Windows SCM, systemd)
//! - `process` - `std::process` command runner
//! - `confirm` - terminal confirmation prompt

pub mod confirm;
pub mod fs;
pub mod host;
pub mod process;
pub mod service;

pub use confirm::DialoguerConfirmer;
pub use fs::LocalFs;
pub use host::{StaticHostProbe, SystemdHostProbe, WindowsHostProbe};
pub use process::SystemCommandRunner;
pub use service::{SystemdServiceManager, WindowsServiceManager, DEFAULT_UNIT_DIR};
