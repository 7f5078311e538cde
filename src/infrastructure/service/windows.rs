//! Windows Service Control Manager backend
//!
//! Registration goes through the agent's own service installer so the
//! service command line is exactly what the agent expects. State comes from
//! `sc.exe query`, start/restart from PowerShell.

use crate::domain::ports::{
    CommandRunner, CommandSpec, ServiceManager, ServiceSpec, ServiceState,
};
use crate::domain::value_objects::ServiceName;
use crate::error::{DeployError, DeployResult, ServiceOp};
use crate::infrastructure::process::{failure_text, run_helper};

/// `sc.exe` exit code for ERROR_SERVICE_DOES_NOT_EXIST
const SERVICE_DOES_NOT_EXIST: i32 = 1060;

pub struct WindowsServiceManager<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> WindowsServiceManager<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn powershell(&self, op: ServiceOp, name: &ServiceName, cmdlet: &str) -> DeployResult<()> {
        let command = CommandSpec::new("powershell.exe").args([
            "-NoProfile".to_string(),
            "-NonInteractive".to_string(),
            "-Command".to_string(),
            format!("{} -Name '{}' -ErrorAction Stop", cmdlet, name),
        ]);
        self.expect_success(op, name, &command)
    }

    fn expect_success(
        &self,
        op: ServiceOp,
        name: &ServiceName,
        command: &CommandSpec,
    ) -> DeployResult<()> {
        let output = run_helper(&self.runner, command)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(DeployError::service(op, name.as_str(), failure_text(&output)))
        }
    }
}

impl<R: CommandRunner> ServiceManager for WindowsServiceManager<R> {
    fn query(&self, name: &ServiceName) -> DeployResult<ServiceState> {
        let command = CommandSpec::new("sc.exe").args(["query", name.as_str()]);
        let output = run_helper(&self.runner, &command)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        match output.status.code() {
            Some(0) => Ok(parse_sc_state(&stdout)),
            Some(SERVICE_DOES_NOT_EXIST) => Ok(ServiceState::NotInstalled),
            _ if stdout.contains(&format!("FAILED {}", SERVICE_DOES_NOT_EXIST)) => {
                Ok(ServiceState::NotInstalled)
            }
            _ => Err(DeployError::service(
                ServiceOp::Query,
                name.as_str(),
                failure_text(&output),
            )),
        }
    }

    fn install(&self, spec: &ServiceSpec) -> DeployResult<()> {
        let command = CommandSpec::new(&spec.binary)
            .args(["--service", "install", "--service-name"])
            .arg(spec.identity.name.as_str())
            .arg("--service-display-name")
            .arg(&spec.identity.display_name)
            .arg("--config")
            .arg(&spec.config)
            .arg("--config-directory")
            .arg(&spec.config_dir);
        self.expect_success(ServiceOp::Install, &spec.identity.name, &command)
    }

    fn start(&self, name: &ServiceName) -> DeployResult<()> {
        self.powershell(ServiceOp::Start, name, "Start-Service")
    }

    fn restart(&self, name: &ServiceName) -> DeployResult<()> {
        self.powershell(ServiceOp::Restart, name, "Restart-Service -Force")
    }
}

/// Read the `STATE` line of `sc.exe query` output
fn parse_sc_state(text: &str) -> ServiceState {
    let running = text
        .lines()
        .filter(|line| line.trim_start().starts_with("STATE"))
        .any(|line| line.contains("RUNNING"));
    if running {
        ServiceState::Running
    } else {
        ServiceState::Stopped
    }
}
