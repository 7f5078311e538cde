//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod confirmer;
pub mod file_system;
pub mod host_probe;
pub mod service_manager;

pub use command_runner::{CommandRunner, CommandSpec};
pub use confirmer::Confirmer;
pub use file_system::{FileSystem, FsError, FsResult};
pub use host_probe::HostProbe;
pub use service_manager::{ServiceIdentity, ServiceManager, ServiceSpec, ServiceState};
