//! Configuration module for telegraf-deploy
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TELEGRAF_DEPLOY_*)
//! 3. Config file (`--config`, `<source>/telegraf-deploy.toml`, or
//!    `<user config dir>/telegraf-deploy/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod settings;
mod types;

pub use loader::{
    discover, load, with_overrides_from, ConfigWarning, ENV_DESTINATION, ENV_INSTALL_SERVICE,
    ENV_LOG_PATH, ENV_SERVICE_NAME, ENV_SOURCE, SOURCE_CONFIG_FILE,
};
pub use settings::{
    default_destination, default_log_path, default_source, CliOverrides, Settings, LOG_FILE_NAME,
};
pub use types::{Config, DeploySection, HostSection, LoggingSection, ServiceSection};
