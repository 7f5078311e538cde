//! Windows host probe
//!
//! One PowerShell invocation reports the OS product type and which of the
//! role services are installed:
//!
//! ```text
//! ProductType=3
//! Service=DNS
//! Service=DFSR
//! ```
//!
//! Product type 1 is a workstation, 2 a domain controller, 3 a member server.

use crate::domain::entities::{HostFacts, RoleService};
use crate::domain::ports::{CommandRunner, CommandSpec, HostProbe};
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::process::{failure_text, run_helper};

const PROBE_SCRIPT: &str = "$ErrorActionPreference = 'Stop'; \
$os = Get-CimInstance -ClassName Win32_OperatingSystem; \
Write-Output (\"ProductType=\" + $os.ProductType); \
Get-Service -Name DNS,DFSR,Dfs -ErrorAction SilentlyContinue | \
ForEach-Object { Write-Output (\"Service=\" + $_.Name) }";

pub struct WindowsHostProbe<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> WindowsHostProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn command() -> CommandSpec {
        CommandSpec::new("powershell.exe").args([
            "-NoProfile",
            "-NonInteractive",
            "-Command",
            PROBE_SCRIPT,
        ])
    }
}

impl<R: CommandRunner> HostProbe for WindowsHostProbe<R> {
    fn probe(&self) -> DeployResult<HostFacts> {
        let output = run_helper(&self.runner, &Self::command())
            .map_err(|e| DeployError::role_detection(e.to_string()))?;
        if !output.status.success() {
            return Err(DeployError::role_detection(format!(
                "host query failed: {}",
                failure_text(&output)
            )));
        }
        parse_probe_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse the `Key=Value` lines written by the probe script
pub(crate) fn parse_probe_output(text: &str) -> DeployResult<HostFacts> {
    let mut product_type = None;
    let mut facts = HostFacts::default();

    for line in text.lines() {
        let Some((key, value)) = line.trim().split_once('=') else {
            continue;
        };
        match key.trim() {
            "ProductType" => {
                product_type = Some(value.trim().parse::<u8>().map_err(|_| {
                    DeployError::role_detection(format!("unexpected product type '{}'", value))
                })?);
            }
            "Service" => match RoleService::from_windows_service_name(value.trim()) {
                Some(service) => {
                    facts.services.insert(service);
                }
                None => tracing::debug!(service = value, "ignoring unrelated service"),
            },
            _ => {}
        }
    }

    match product_type {
        Some(1) => {}
        Some(2) => {
            facts.is_server = true;
            facts.is_domain_controller = true;
        }
        Some(3) => facts.is_server = true,
        Some(other) => {
            return Err(DeployError::role_detection(format!(
                "unknown product type {}",
                other
            )))
        }
        None => {
            return Err(DeployError::role_detection(
                "product type missing from host query output",
            ))
        }
    }
    Ok(facts)
}
