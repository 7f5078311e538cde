//! Test environment builder for isolated telegraf-deploy testing.
//!
//! Provides `TestEnv` - a temporary source directory holding a fake agent and
//! its configs, an empty destination, and helpers to run the CLI against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use telegraf_deploy::domain::value_objects::ContentHash;

use super::fixtures::*;

const ENV_VARS: [&str; 6] = [
    "TELEGRAF_DEPLOY_SOURCE",
    "TELEGRAF_DEPLOY_DESTINATION",
    "TELEGRAF_DEPLOY_SERVICE_NAME",
    "TELEGRAF_DEPLOY_INSTALL_SERVICE",
    "TELEGRAF_DEPLOY_LOG_PATH",
    "TELEGRAF_DEPLOY_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub source: TempDir,
    /// Parent of the install root; the root itself starts out missing
    pub target: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn destination(&self) -> PathBuf {
        self.target.path().join("telegraf")
    }

    pub fn log_path(&self) -> PathBuf {
        self.target.path().join("logs").join("telegraf-deploy.log")
    }

    pub fn destination_path(&self, relative: &str) -> PathBuf {
        self.destination().join(relative)
    }

    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.source.path().join(relative)
    }

    pub fn read_deployed(&self, relative: &str) -> String {
        std::fs::read_to_string(self.destination_path(relative))
            .unwrap_or_else(|e| panic!("failed to read deployed file {}: {}", relative, e))
    }

    pub fn write_source(&self, relative: &str, content: &str) {
        std::fs::write(self.source_path(relative), content).unwrap();
    }

    /// Ship a reference digest describing `content`
    pub fn write_digest(&self, content: &str) {
        let digest = ContentHash::from_bytes(content.as_bytes());
        self.write_source("telegraf.sha256", &format!("{}\n", digest.hex()));
    }

    /// Run with `--source`, `--destination` and `--log-path` pointing into
    /// this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let destination = self.destination();
        let log_path = self.log_path();
        let mut full_args: Vec<&str> = vec![
            "--source",
            path_str(self.source.path()),
            "--destination",
            path_str(&destination),
            "--log-path",
            path_str(&log_path),
        ];
        full_args.extend_from_slice(args);
        self.run_raw(&full_args)
    }

    /// Run with exactly the given arguments
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.target.path())
            .args(args)
            .env("NO_COLOR", "1");
        for key in ENV_VARS {
            cmd.env_remove(key);
        }
        let output = cmd.output().expect("failed to execute telegraf-deploy");
        to_result(output)
    }

    /// Every file under the install root, relative and sorted
    pub fn deployed_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(&self.destination(), &self.destination(), &mut files);
        files.sort();
        files
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let relative = path.strip_prefix(root).unwrap();
            out.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for `TestEnv`
pub struct TestEnvBuilder {
    agent: String,
    host: String,
    digest: bool,
    extra_config: String,
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self {
            agent: AGENT_OK.to_string(),
            host: HOST_DNS_SERVER.to_string(),
            digest: true,
            extra_config: String::new(),
        }
    }
}

impl TestEnvBuilder {
    pub fn with_agent(mut self, script: &str) -> Self {
        self.agent = script.to_string();
        self
    }

    /// `[host]` section pinned in the source configuration file
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn without_digest(mut self) -> Self {
        self.digest = false;
        self
    }

    /// Extra TOML appended to the source configuration file
    pub fn with_config(mut self, toml: &str) -> Self {
        self.extra_config = toml.to_string();
        self
    }

    pub fn build(self) -> TestEnv {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let dir = source.path();

        let binary = dir.join("telegraf");
        std::fs::write(&binary, &self.agent).unwrap();
        make_executable(&binary);
        if self.digest {
            let digest = ContentHash::from_bytes(self.agent.as_bytes());
            std::fs::write(dir.join("telegraf.sha256"), format!("{}\n", digest.hex())).unwrap();
        }

        for (name, content) in [
            ("telegraf.conf", BASE_CONFIG),
            ("system.conf", SYSTEM_CONFIG),
            ("active_directory.conf", ACTIVE_DIRECTORY_CONFIG),
            ("dns.conf", DNS_CONFIG),
            ("dfs_replication.conf", DFS_REPLICATION_CONFIG),
            ("dfs_namespace.conf", DFS_NAMESPACE_CONFIG),
        ] {
            std::fs::write(dir.join(name), content).unwrap();
        }

        let config = format!(
            "[service]\ninstall = false\n\n{}\n{}",
            self.host, self.extra_config
        );
        std::fs::write(dir.join("telegraf-deploy.toml"), config).unwrap();

        TestEnv {
            source,
            target,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_telegraf-deploy")),
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
