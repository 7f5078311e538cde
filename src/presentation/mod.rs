//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Rendering the run summary (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Flag definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `report` - Run summary rendering

pub mod cli;
pub mod factory;
pub mod report;

pub use cli::Cli;
pub use factory::{create_deploy_use_case, deploy_options};
pub use report::{render_json, OutputFormat, TextReport};
