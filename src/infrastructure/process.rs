//! Infrastructure implementation of the `CommandRunner` port.

use std::process::{Command, Output, Stdio};

use crate::domain::ports::{CommandRunner, CommandSpec};
use crate::error::DeployError;

/// Production `CommandRunner` - blocking `std::process` execution with
/// captured stdout/stderr and no stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec) -> std::io::Result<Output> {
        tracing::trace!(%command, "spawning");
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        tracing::trace!(program = %command.program_name(), status = ?output.status.code(), "exited");
        Ok(output)
    }
}

/// Run a helper program whose failure to spawn is fatal
pub(crate) fn run_helper<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &CommandSpec,
) -> Result<Output, DeployError> {
    runner.run(command).map_err(|source| DeployError::Spawn {
        program: command.program_name(),
        source,
    })
}

/// Stdout as trimmed text
pub(crate) fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Best single-line description of a failed helper run
pub(crate) fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stderr.trim().is_empty() { stdout } else { stderr };
    match text.lines().rev().find(|l| !l.trim().is_empty()) {
        Some(line) => line.trim().to_string(),
        None => format!("exited with {:?}", output.status.code()),
    }
}
