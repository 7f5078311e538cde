//! Deploy Module
//!
//! Orchestrates one telegraf deployment run.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`DeployOptions`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use telegraf_deploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(fs, host_probe, services, runner);
//! let result = use_case.execute(&DeployOptions::new(layout))?;
//! ```

mod options;
mod use_case;

pub use options::DeployOptions;
pub use use_case::DeployUseCase;
