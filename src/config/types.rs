//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{HostFacts, RoleService};
use crate::domain::services::{ArtifactFiles, DEFAULT_CONFIG_DIR};
use crate::error::DeployResult;

use super::loader::{self, ConfigWarning};

/// `[deploy]` - where artifacts come from and go to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploySection {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    /// Name of the configuration subdirectory under the destination
    pub config_dir: String,
}

impl Default for DeploySection {
    fn default() -> Self {
        Self {
            source: None,
            destination: None,
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
        }
    }
}

/// `[service]` - background service management
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    pub install: bool,
    pub name: String,
    pub display_name: String,
    /// systemd unit directory (ignored on Windows)
    pub unit_dir: Option<PathBuf>,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            install: true,
            name: "telegraf".to_string(),
            display_name: "Telegraf".to_string(),
            unit_dir: None,
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub path: Option<PathBuf>,
}

/// `[host]` - pinned host facts; when present the OS is not probed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSection {
    pub server: bool,
    pub domain_controller: bool,
    pub services: Vec<RoleService>,
}

impl HostSection {
    pub fn facts(&self) -> HostFacts {
        HostFacts {
            is_server: self.server,
            is_domain_controller: self.domain_controller,
            services: self.services.iter().copied().collect(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub deploy: DeploySection,
    pub service: ServiceSection,
    pub artifacts: ArtifactFiles,
    pub logging: LoggingSection,
    pub host: Option<HostSection>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (TELEGRAF_DEPLOY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
