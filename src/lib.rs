//! telegraf-deploy - idempotent host-local deployment of the Telegraf agent
//!
//! Copies the agent binary and its role-specific configuration fragments into
//! the install root, verifies the configuration with the agent itself, and
//! installs or restarts the background service. Running it twice with the
//! same inputs changes nothing the second time.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployUseCase};
pub use config::{CliOverrides, Config, Settings};
pub use domain::entities::{HostFacts, RoleService, RunResult};
pub use error::{DeployError, DeployResult};
