//! Artifact catalog
//!
//! Builds the static list of managed artifacts from the source/destination
//! layout. Pure path arithmetic, no I/O.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Applicability, ManagedArtifact};
use crate::domain::policies::{OptionalConfig, ROLE_TABLE};

/// Name of the configuration subdirectory under the destination root
pub const DEFAULT_CONFIG_DIR: &str = "telegraf.d";

pub const BINARY_NAME: &str = "agent binary";
pub const BASE_CONFIG_NAME: &str = "base config";
pub const SYSTEM_CONFIG_NAME: &str = "system metrics config";

/// File names of every artifact, as found in the source directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactFiles {
    pub binary: String,
    /// Reference digest of the binary, `<binary>.sha256` unless set
    pub digest: Option<String>,
    pub base_config: String,
    pub system_config: String,
    pub active_directory: String,
    pub dns: String,
    pub dfs_replication: String,
    pub dfs_namespace: String,
}

impl Default for ArtifactFiles {
    fn default() -> Self {
        let binary = if cfg!(windows) { "telegraf.exe" } else { "telegraf" };
        Self {
            binary: binary.to_string(),
            digest: None,
            base_config: "telegraf.conf".to_string(),
            system_config: "system.conf".to_string(),
            active_directory: "active_directory.conf".to_string(),
            dns: "dns.conf".to_string(),
            dfs_replication: "dfs_replication.conf".to_string(),
            dfs_namespace: "dfs_namespace.conf".to_string(),
        }
    }
}

impl ArtifactFiles {
    pub fn digest_file(&self) -> String {
        self.digest
            .clone()
            .unwrap_or_else(|| format!("{}.sha256", self.binary))
    }

    pub fn optional(&self, config: OptionalConfig) -> &str {
        match config {
            OptionalConfig::ActiveDirectory => &self.active_directory,
            OptionalConfig::Dns => &self.dns,
            OptionalConfig::DfsReplication => &self.dfs_replication,
            OptionalConfig::DfsNamespace => &self.dfs_namespace,
        }
    }
}

/// Where artifacts come from and where they go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub config_dir_name: String,
    pub files: ArtifactFiles,
}

impl ArtifactLayout {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            config_dir_name: DEFAULT_CONFIG_DIR.to_string(),
            files: ArtifactFiles::default(),
        }
    }

    pub fn with_files(mut self, files: ArtifactFiles) -> Self {
        self.files = files;
        self
    }

    pub fn with_config_dir_name(mut self, name: impl Into<String>) -> Self {
        self.config_dir_name = name.into();
        self
    }

    pub fn config_dir(&self) -> PathBuf {
        self.destination.join(&self.config_dir_name)
    }

    pub fn binary_destination(&self) -> PathBuf {
        self.destination.join(&self.files.binary)
    }

    pub fn base_config_destination(&self) -> PathBuf {
        self.destination.join(&self.files.base_config)
    }

    pub fn digest_source(&self) -> PathBuf {
        self.source.join(self.files.digest_file())
    }

    fn source_file(&self, name: &str) -> PathBuf {
        self.source.join(name)
    }

    fn in_config_dir(&self, name: &str) -> PathBuf {
        self.config_dir().join(file_name(name))
    }

    /// Every artifact this tool knows about, in deployment order.
    ///
    /// Binary and base config land at the destination root; everything else
    /// in the config subdirectory.
    pub fn catalog(&self) -> Vec<ManagedArtifact> {
        let files = &self.files;
        let mut artifacts = vec![
            ManagedArtifact::binary(
                BINARY_NAME,
                self.source_file(&files.binary),
                self.binary_destination(),
            ),
            ManagedArtifact::config(
                BASE_CONFIG_NAME,
                self.source_file(&files.base_config),
                self.base_config_destination(),
                Applicability::Always,
            ),
            ManagedArtifact::config(
                SYSTEM_CONFIG_NAME,
                self.source_file(&files.system_config),
                self.in_config_dir(&files.system_config),
                Applicability::Always,
            ),
        ];

        for (condition, config) in ROLE_TABLE {
            let file = files.optional(config);
            artifacts.push(ManagedArtifact::config(
                config.name(),
                self.source_file(file),
                self.in_config_dir(file),
                Applicability::Role(condition),
            ));
        }

        artifacts
    }
}

fn file_name(name: &str) -> &Path {
    let path = Path::new(name);
    path.file_name().map(Path::new).unwrap_or(path)
}
