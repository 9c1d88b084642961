//! Test doubles for the process seam
//!
//! Enabled for unit tests and, through the `test-support` feature, for the
//! integration suite.

use crate::core::error::{ProcessError, ReleaseResult};
use crate::core::process::{CommandExecutor, ProcessCommand};
use crate::core::vcs::system_git::subcommand;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

type Responder = Box<dyn Fn(&ProcessCommand) -> ReleaseResult<()>>;

/// Records every command it is asked to run
///
/// By default every command succeeds without side effects. A responder can
/// simulate tool behaviour or inject failures.
pub struct RecordingExecutor {
  calls: RefCell<Vec<ProcessCommand>>,
  responder: Responder,
}

impl Default for RecordingExecutor {
  fn default() -> Self {
    Self::new()
  }
}

impl RecordingExecutor {
  pub fn new() -> Self {
    Self::with_responder(|_| Ok(()))
  }

  pub fn with_responder(responder: impl Fn(&ProcessCommand) -> ReleaseResult<()> + 'static) -> Self {
    Self {
      calls: RefCell::new(Vec::new()),
      responder: Box::new(responder),
    }
  }

  /// Fail (exit code 1) every command matching `predicate`
  pub fn failing_on(predicate: impl Fn(&ProcessCommand) -> bool + 'static) -> Self {
    Self::with_responder(move |cmd| if predicate(cmd) { Err(exit_failure(cmd)) } else { Ok(()) })
  }

  /// Fake the filesystem effects of gsutil downloads and git clones
  pub fn simulating_tools() -> Self {
    Self::with_responder(simulate_tool)
  }

  /// Like [`simulating_tools`](Self::simulating_tools), failing commands matching `predicate`
  pub fn simulating_tools_failing_on(predicate: impl Fn(&ProcessCommand) -> bool + 'static) -> Self {
    Self::with_responder(move |cmd| {
      if predicate(cmd) {
        return Err(exit_failure(cmd));
      }
      simulate_tool(cmd)
    })
  }

  /// Commands run so far, in order
  pub fn calls(&self) -> Vec<ProcessCommand> {
    self.calls.borrow().clone()
  }

  /// Git subcommands run so far, in order
  pub fn git_subcommands(&self) -> Vec<String> {
    self
      .calls
      .borrow()
      .iter()
      .filter_map(|c| subcommand(c).map(str::to_string))
      .collect()
  }
}

impl CommandExecutor for RecordingExecutor {
  fn run(&self, command: &ProcessCommand) -> ReleaseResult<()> {
    self.calls.borrow_mut().push(command.clone());
    (self.responder)(command)
  }
}

fn exit_failure(cmd: &ProcessCommand) -> crate::core::error::ReleaseError {
  ProcessError::Failed {
    command: cmd.to_string(),
    code: Some(1),
  }
  .into()
}

/// Files a simulated documentation download produces
pub const SIMULATED_DOC_FILES: &[&str] = &["index.html", "api/core.html"];

/// Tracked file present in a simulated fresh clone
pub const SIMULATED_STALE_FILE: &str = "stale.html";

fn simulate_tool(cmd: &ProcessCommand) -> ReleaseResult<()> {
  if is_recursive_storage_copy(cmd) {
    let (src, dst) = copy_endpoints(cmd);
    let name = src.trim_end_matches('/').rsplit('/').next().unwrap_or("docs");
    let root = Path::new(dst).join(name);
    for file in SIMULATED_DOC_FILES {
      write_file(&root.join(file), "<html></html>")?;
    }
  } else if subcommand(cmd) == Some("clone") {
    let parent = PathBuf::from(cmd.arg_after("-C").unwrap_or("."));
    let dir = cmd.args.last().map(String::as_str).unwrap_or("clone");
    write_file(&parent.join(dir).join(SIMULATED_STALE_FILE), "old")?;
  }
  Ok(())
}

fn is_recursive_storage_copy(cmd: &ProcessCommand) -> bool {
  cmd.arg_position("cp").is_some() && cmd.arg_position("-r").is_some() && subcommand(cmd).is_none()
}

fn copy_endpoints(cmd: &ProcessCommand) -> (&str, &str) {
  let n = cmd.args.len();
  (cmd.args[n - 2].as_str(), cmd.args[n - 1].as_str())
}

fn write_file(path: &Path, contents: &str) -> ReleaseResult<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, contents)?;
  Ok(())
}
