//! External process invocation
//!
//! Every tool the release scripts drive (archivers, gsutil, git) is described
//! as a [`ProcessCommand`]: program, argument vector and optional standard
//! input. The environment is inherited. Nothing is ever interpolated
//! into a shell line, so paths with spaces or quotes reach the tool intact.
//!
//! Commands are executed through the [`CommandExecutor`] trait so workflows can
//! be exercised without spawning real tools.

use crate::core::error::{ProcessError, ReleaseResult};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// A fully described external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
  pub program: String,
  pub args: Vec<String>,
  /// Written to the child's stdin, which is then closed
  pub stdin: Option<String>,
}

impl ProcessCommand {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      stdin: None,
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn stdin(mut self, input: impl Into<String>) -> Self {
    self.stdin = Some(input.into());
    self
  }

  /// Position of `flag` in the argument list
  pub fn arg_position(&self, flag: &str) -> Option<usize> {
    self.args.iter().position(|a| a == flag)
  }

  /// Argument immediately following `flag`
  pub fn arg_after(&self, flag: &str) -> Option<&str> {
    self
      .arg_position(flag)
      .and_then(|i| self.args.get(i + 1))
      .map(String::as_str)
  }
}

/// Render a path as a single command argument
pub fn path_arg(path: &Path) -> String {
  path.to_string_lossy().into_owned()
}

fn quote(arg: &str) -> String {
  if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
    return arg.to_string();
  }
  format!("'{}'", arg.replace('\'', "'\\''"))
}

impl fmt::Display for ProcessCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", quote(&self.program))?;
    for arg in &self.args {
      write!(f, " {}", quote(arg))?;
    }
    if let Some(input) = &self.stdin {
      write!(f, " <<< {} line(s)", input.lines().count())?;
    }
    Ok(())
  }
}

/// Abstraction for running external commands
pub trait CommandExecutor {
  /// Run a command to completion.
  ///
  /// Standard output and error are inherited. A non-zero exit is an error.
  fn run(&self, command: &ProcessCommand) -> ReleaseResult<()>;
}

/// Executes commands on the host system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
  fn run(&self, command: &ProcessCommand) -> ReleaseResult<()> {
    debug!(command = %command, "spawning");

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);
    if command.stdin.is_some() {
      cmd.stdin(Stdio::piped());
    }

    let mut child = cmd.spawn().map_err(|source| ProcessError::Spawn {
      program: command.program.clone(),
      source,
    })?;

    if let Some(input) = &command.stdin
      && let Some(mut pipe) = child.stdin.take()
    {
      // A child that exits without reading its input reports through its status
      if let Err(e) = pipe.write_all(input.as_bytes())
        && e.kind() != io::ErrorKind::BrokenPipe
      {
        drop(pipe);
        reap(&mut child);
        return Err(e.into());
      }
    }

    let status = child.wait()?;
    debug!(command = %command.program, ?status, "finished");

    if !status.success() {
      return Err(
        ProcessError::Failed {
          command: command.to_string(),
          code: status.code(),
        }
        .into(),
      );
    }

    Ok(())
  }
}

/// Stop a child whose input could not be delivered and collect its status
fn reap(child: &mut Child) {
  let _ = child.kill();
  let _ = child.wait();
}
