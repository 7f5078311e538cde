//! Effective settings for one run
//!
//! Merges command-line flags over the loaded configuration (which already
//! carries environment overrides) over built-in defaults.

use std::path::PathBuf;

use crate::domain::entities::HostFacts;
use crate::domain::ports::ServiceIdentity;
use crate::domain::services::ArtifactLayout;
use crate::domain::value_objects::ServiceName;
use crate::error::DeployResult;

use super::types::Config;

pub const LOG_FILE_NAME: &str = "telegraf-deploy.log";

/// Values given on the command line; `None` means not given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub install_service: Option<bool>,
    pub service_name: Option<String>,
    pub service_display_name: Option<String>,
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub layout: ArtifactLayout,
    pub install_service: bool,
    pub identity: ServiceIdentity,
    pub log_path: PathBuf,
    /// Pinned host facts; `None` means probe the OS
    pub host: Option<HostFacts>,
    pub unit_dir: Option<PathBuf>,
}

impl Config {
    /// Apply command-line overrides and fill in defaults.
    ///
    /// Fails only on an invalid service name.
    pub fn resolve(&self, cli: &CliOverrides) -> DeployResult<Settings> {
        let source = cli
            .source
            .clone()
            .or_else(|| self.deploy.source.clone())
            .unwrap_or_else(default_source);
        let destination = cli
            .destination
            .clone()
            .or_else(|| self.deploy.destination.clone())
            .unwrap_or_else(default_destination);

        let name = cli.service_name.as_deref().unwrap_or(&self.service.name);
        let identity = ServiceIdentity {
            name: ServiceName::parse(name)?,
            display_name: cli
                .service_display_name
                .clone()
                .unwrap_or_else(|| self.service.display_name.clone()),
        };

        Ok(Settings {
            layout: ArtifactLayout::new(source, destination)
                .with_config_dir_name(&self.deploy.config_dir)
                .with_files(self.artifacts.clone()),
            install_service: cli.install_service.unwrap_or(self.service.install),
            identity,
            log_path: cli
                .log_path
                .clone()
                .or_else(|| self.logging.path.clone())
                .unwrap_or_else(default_log_path),
            host: self.host.as_ref().map(|h| h.facts()),
            unit_dir: self.service.unit_dir.clone(),
        })
    }
}

/// Directory holding the running executable
pub fn default_source() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_destination() -> PathBuf {
    if cfg!(windows) {
        std::env::var_os("ProgramFiles")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\Program Files"))
            .join("Telegraf")
    } else {
        PathBuf::from("/opt/telegraf")
    }
}

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}
