//! Shared test doubles for application-layer tests.
//!
//! In-memory filesystem plus recording mocks for every process-facing port.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use crate::domain::entities::HostFacts;
use crate::domain::ports::{
    CommandRunner, CommandSpec, Confirmer, FileSystem, FsError, FsResult, HostProbe,
    ServiceManager, ServiceSpec, ServiceState,
};
use crate::domain::value_objects::{ContentHash, ServiceName};
use crate::error::{DeployError, DeployResult, ServiceOp};

// ── Cross-platform ExitStatus helper ─────────────────────────────────────

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

pub fn output(code: i32, stdout: &str, stderr: &str) -> Output {
    Output {
        status: exit_status(code),
        stdout: stdout.as_bytes().to_vec(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

// ── Filesystem ───────────────────────────────────────────────────────────

/// In-memory filesystem recording every mutation
#[derive(Default)]
pub struct MemoryFs {
    pub files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub mutations: RefCell<Vec<String>>,
    pub fail_copies: bool,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), content.to_vec());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.borrow_mut().insert(path.into());
        self
    }

    pub fn content(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations.borrow().len()
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| ContentHash::from_bytes(bytes))
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.mutations
            .borrow_mut()
            .push(format!("mkdir {}", path.display()));
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        if self.fail_copies {
            return Err(FsError::Io {
                path: to.to_path_buf(),
                source: std::io::Error::other("disk full"),
            });
        }
        let content = self
            .content(from)
            .ok_or_else(|| FsError::NotFound(from.to_path_buf()))?;
        self.mutations
            .borrow_mut()
            .push(format!("copy {} -> {}", from.display(), to.display()));
        self.files.borrow_mut().insert(to.to_path_buf(), content);
        Ok(())
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        self.mutations
            .borrow_mut()
            .push(format!("write {}", path.display()));
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}

// ── Processes ────────────────────────────────────────────────────────────

/// Runner replaying queued outputs and recording every command
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<CommandSpec>>,
    pub responses: RefCell<Vec<std::io::Result<Output>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response (FIFO)
    pub fn respond(self, code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses
            .borrow_mut()
            .push(Ok(output(code, stdout, stderr)));
        self
    }

    pub fn fail_spawn(self) -> Self {
        self.responses.borrow_mut().push(Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        )));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> std::io::Result<Output> {
        self.calls.borrow_mut().push(command.clone());
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            Ok(output(0, "", ""))
        } else {
            responses.remove(0)
        }
    }
}

// ── Ports ────────────────────────────────────────────────────────────────

pub struct FixedHostProbe(pub DeployResult<HostFacts>);

impl HostProbe for FixedHostProbe {
    fn probe(&self) -> DeployResult<HostFacts> {
        match &self.0 {
            Ok(facts) => Ok(facts.clone()),
            Err(e) => Err(DeployError::role_detection(e.to_string())),
        }
    }
}

/// Service manager recording calls as `"<op> <name>"`
pub struct RecordingServiceManager {
    pub state: ServiceState,
    pub calls: RefCell<Vec<String>>,
    pub fail_on: Option<ServiceOp>,
}

impl RecordingServiceManager {
    pub fn new(state: ServiceState) -> Self {
        Self {
            state,
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn failing(mut self, op: ServiceOp) -> Self {
        self.fail_on = Some(op);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Calls other than `query`
    pub fn mutation_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("query"))
            .collect()
    }

    fn record(&self, op: ServiceOp, name: &ServiceName) -> DeployResult<()> {
        self.calls.borrow_mut().push(format!("{} {}", op, name));
        if self.fail_on == Some(op) {
            return Err(DeployError::service(op, name.as_str(), "simulated failure"));
        }
        Ok(())
    }
}

impl ServiceManager for RecordingServiceManager {
    fn query(&self, name: &ServiceName) -> DeployResult<ServiceState> {
        self.record(ServiceOp::Query, name)?;
        Ok(self.state)
    }

    fn install(&self, spec: &ServiceSpec) -> DeployResult<()> {
        self.record(ServiceOp::Install, &spec.identity.name)
    }

    fn start(&self, name: &ServiceName) -> DeployResult<()> {
        self.record(ServiceOp::Start, name)
    }

    fn restart(&self, name: &ServiceName) -> DeployResult<()> {
        self.record(ServiceOp::Restart, name)
    }
}

/// Confirmer giving a fixed answer and counting prompts
pub struct ScriptedConfirmer {
    pub answer: bool,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> DeployResult<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answer)
    }
}

impl Confirmer for std::rc::Rc<ScriptedConfirmer> {
    fn confirm(&self, prompt: &str) -> DeployResult<bool> {
        self.as_ref().confirm(prompt)
    }
}
