//! systemd host probe
//!
//! A host booting into `graphical.target` is a workstation. Role services
//! come from the unit files the administrator enabled: `samba-ad-dc` marks a
//! domain controller, `named`/`bind9` a DNS server. Units that are merely
//! installed (distributions ship `samba-ad-dc` masked on plain file servers)
//! do not count. DFS has no counterpart here.

use std::collections::BTreeSet;

use crate::domain::entities::{HostFacts, RoleService};
use crate::domain::ports::{CommandRunner, CommandSpec, HostProbe};
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::process::{failure_text, run_helper, stdout_text};

const WORKSTATION_TARGET: &str = "graphical.target";
const DOMAIN_CONTROLLER_UNIT: &str = "samba-ad-dc";
const DNS_UNITS: [&str; 2] = ["named", "bind9"];
/// Unit-file states that start the unit at boot
const ENABLED_STATES: [&str; 2] = ["enabled", "enabled-runtime"];

pub struct SystemdHostProbe<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SystemdHostProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn systemctl(&self, args: &[&str]) -> DeployResult<String> {
        let command = CommandSpec::new("systemctl").args(args);
        let output = run_helper(&self.runner, &command)
            .map_err(|e| DeployError::role_detection(e.to_string()))?;
        if !output.status.success() {
            return Err(DeployError::role_detection(format!(
                "`{}` failed: {}",
                command,
                failure_text(&output)
            )));
        }
        Ok(stdout_text(&output))
    }
}

impl<R: CommandRunner> HostProbe for SystemdHostProbe<R> {
    fn probe(&self) -> DeployResult<HostFacts> {
        let target = self.systemctl(&["get-default"])?;
        let units = self.systemctl(&[
            "list-unit-files",
            "--type=service",
            "--no-legend",
            "--plain",
        ])?;
        Ok(facts_from(&target, &enabled_units(&units)))
    }
}

/// Names of enabled units, without the `.service` suffix
fn enabled_units(listing: &str) -> BTreeSet<String> {
    listing
        .lines()
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let unit = columns.next()?;
            let state = columns.next()?;
            ENABLED_STATES
                .contains(&state)
                .then(|| unit.trim_end_matches(".service").to_string())
        })
        .collect()
}

fn facts_from(default_target: &str, units: &BTreeSet<String>) -> HostFacts {
    let mut facts = HostFacts::default();
    facts.is_server = default_target.trim() != WORKSTATION_TARGET;
    facts.is_domain_controller = units.contains(DOMAIN_CONTROLLER_UNIT);
    if DNS_UNITS.iter().any(|u| units.contains(*u)) {
        facts.services.insert(RoleService::DnsServer);
    }
    facts
}
