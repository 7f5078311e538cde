//! systemd backend
//!
//! Installs a unit file under the unit directory and drives it through
//! `systemctl`.

use std::path::{Path, PathBuf};

use crate::domain::ports::{
    CommandRunner, CommandSpec, FileSystem, ServiceManager, ServiceSpec, ServiceState,
};
use crate::domain::value_objects::ServiceName;
use crate::error::{DeployError, DeployResult, ServiceOp};
use crate::infrastructure::process::{failure_text, run_helper, stdout_text};

pub const DEFAULT_UNIT_DIR: &str = "/etc/systemd/system";

pub struct SystemdServiceManager<FS: FileSystem, R: CommandRunner> {
    fs: FS,
    runner: R,
    unit_dir: PathBuf,
}

impl<FS: FileSystem, R: CommandRunner> SystemdServiceManager<FS, R> {
    pub fn new(fs: FS, runner: R) -> Self {
        Self {
            fs,
            runner,
            unit_dir: PathBuf::from(DEFAULT_UNIT_DIR),
        }
    }

    pub fn with_unit_dir(mut self, unit_dir: impl Into<PathBuf>) -> Self {
        self.unit_dir = unit_dir.into();
        self
    }

    pub fn unit_path(&self, name: &ServiceName) -> PathBuf {
        self.unit_dir.join(unit_name(name))
    }

    fn systemctl(&self, op: ServiceOp, name: &ServiceName, args: &[&str]) -> DeployResult<String> {
        let command = CommandSpec::new("systemctl").args(args);
        let output = run_helper(&self.runner, &command)?;
        if output.status.success() {
            Ok(stdout_text(&output))
        } else {
            Err(DeployError::service(op, name.as_str(), failure_text(&output)))
        }
    }
}

impl<FS: FileSystem, R: CommandRunner> ServiceManager for SystemdServiceManager<FS, R> {
    fn query(&self, name: &ServiceName) -> DeployResult<ServiceState> {
        let unit = unit_name(name);
        let text = self.systemctl(
            ServiceOp::Query,
            name,
            &["show", &unit, "--property=LoadState,ActiveState"],
        )?;
        Ok(parse_show(&text))
    }

    fn install(&self, spec: &ServiceSpec) -> DeployResult<()> {
        let name = &spec.identity.name;
        let path = self.unit_path(name);
        self.fs
            .write(&path, render_unit(spec).as_bytes())
            .map_err(|e| DeployError::service(ServiceOp::Install, name.as_str(), e.to_string()))?;
        tracing::debug!(unit = %path.display(), "wrote unit file");

        self.systemctl(ServiceOp::Install, name, &["daemon-reload"])?;
        self.systemctl(ServiceOp::Install, name, &["enable", &unit_name(name)])?;
        Ok(())
    }

    fn start(&self, name: &ServiceName) -> DeployResult<()> {
        self.systemctl(ServiceOp::Start, name, &["start", &unit_name(name)])
            .map(|_| ())
    }

    fn restart(&self, name: &ServiceName) -> DeployResult<()> {
        self.systemctl(ServiceOp::Restart, name, &["restart", &unit_name(name)])
            .map(|_| ())
    }
}

fn unit_name(name: &ServiceName) -> String {
    format!("{}.service", name)
}

fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

fn render_unit(spec: &ServiceSpec) -> String {
    format!(
        "[Unit]
Description={display}
Documentation=https://github.com/influxdata/telegraf
After=network-online.target
Wants=network-online.target

[Service]
Type=simple
ExecStart={binary} --config {config} --config-directory {config_dir}
ExecReload=/bin/kill -HUP $MAINPID
Restart=on-failure
RestartForceExitStatus=SIGPIPE
KillMode=mixed

[Install]
WantedBy=multi-user.target
",
        display = spec.identity.display_name,
        binary = quoted(&spec.binary),
        config = quoted(&spec.config),
        config_dir = quoted(&spec.config_dir),
    )
}

/// Interpret `systemctl show --property=LoadState,ActiveState`
fn parse_show(text: &str) -> ServiceState {
    let mut load_state = "";
    let mut active_state = "";
    for line in text.lines() {
        match line.split_once('=') {
            Some(("LoadState", value)) => load_state = value.trim(),
            Some(("ActiveState", value)) => active_state = value.trim(),
            _ => {}
        }
    }
    match (load_state, active_state) {
        ("not-found", _) | ("", _) => ServiceState::NotInstalled,
        (_, "active" | "activating" | "reloading") => ServiceState::Running,
        _ => ServiceState::Stopped,
    }
}
