//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::Config;

/// File looked up next to the artifacts
pub const SOURCE_CONFIG_FILE: &str = "telegraf-deploy.toml";

pub const ENV_SOURCE: &str = "TELEGRAF_DEPLOY_SOURCE";
pub const ENV_DESTINATION: &str = "TELEGRAF_DEPLOY_DESTINATION";
pub const ENV_SERVICE_NAME: &str = "TELEGRAF_DEPLOY_SERVICE_NAME";
pub const ENV_INSTALL_SERVICE: &str = "TELEGRAF_DEPLOY_INSTALL_SERVICE";
pub const ENV_LOG_PATH: &str = "TELEGRAF_DEPLOY_LOG_PATH";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the configuration file to load.
///
/// An explicit path always wins (and must exist). Otherwise the file next to
/// the artifacts, then the per-user one; `None` means built-in defaults.
pub fn discover(explicit: Option<&Path>, source: Option<&Path>) -> DeployResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(DeployError::Config {
                file: path.to_path_buf(),
                message: "configuration file not found".to_string(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let candidates = [
        source.map(|s| s.join(SOURCE_CONFIG_FILE)),
        dirs::config_dir().map(|d| d.join("telegraf-deploy").join("config.toml")),
    ];
    Ok(candidates.into_iter().flatten().find(|p| p.is_file()))
}

/// Load the discovered file (or defaults), then apply environment overrides
pub fn load(
    explicit: Option<&Path>,
    source: Option<&Path>,
) -> DeployResult<(Config, Vec<ConfigWarning>, Option<PathBuf>)> {
    let file = discover(explicit, source)?;
    let (config, warnings) = match &file {
        Some(path) => {
            tracing::debug!(file = %path.display(), "loading configuration");
            load_with_warnings(path)?
        }
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings, file))
}

/// Apply environment variable overrides (TELEGRAF_DEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any variable lookup
pub fn with_overrides_from(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(source) = var(ENV_SOURCE).filter(|v| !v.is_empty()) {
        config.deploy.source = Some(PathBuf::from(source));
    }
    if let Some(destination) = var(ENV_DESTINATION).filter(|v| !v.is_empty()) {
        config.deploy.destination = Some(PathBuf::from(destination));
    }
    if let Some(name) = var(ENV_SERVICE_NAME) {
        config.service.name = name;
    }
    if let Some(install) = var(ENV_INSTALL_SERVICE) {
        config.service.install = !matches!(
            install.trim().to_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        );
    }
    if let Some(path) = var(ENV_LOG_PATH).filter(|v| !v.is_empty()) {
        config.logging.path = Some(PathBuf::from(path));
    }
    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "source",
        "destination",
        "config_dir",
        "service",
        "install",
        "name",
        "display_name",
        "unit_dir",
        "artifacts",
        "binary",
        "digest",
        "base_config",
        "system_config",
        "active_directory",
        "dns",
        "dfs_replication",
        "dfs_namespace",
        "logging",
        "path",
        "host",
        "server",
        "domain_controller",
        "services",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
