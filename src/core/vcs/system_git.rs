//! System git backend
//!
//! Builds git invocations as [`ProcessCommand`]s so they can be printed in
//! dry-run mode, recorded in tests, or run by the system executor. Every
//! command is pinned to a repository directory with `-C`.
//!
//! Git runs with the operator's environment and configuration: commit
//! identity, signing, credentials and proxies all come from there.

use crate::core::process::{ProcessCommand, path_arg};
use std::path::{Path, PathBuf};

/// Git command builder for one working directory
#[derive(Debug, Clone)]
pub struct SystemGit {
  /// Directory every command runs against
  pub(crate) repo_path: PathBuf,
}

impl SystemGit {
  /// Target an existing (or about to be created) repository directory
  pub fn at(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
    }
  }

  pub fn repo_path(&self) -> &Path {
    &self.repo_path
  }

  /// Clone `url` into `self.repo_path/<dir_name>` and return a builder for it
  pub fn clone_into(&self, url: &str, dir_name: &str) -> (ProcessCommand, SystemGit) {
    let cmd = self.git_cmd().args(["clone", "--quiet", url, dir_name]);
    (cmd, SystemGit::at(&self.repo_path.join(dir_name)))
  }

  pub fn checkout(&self, branch: &str) -> ProcessCommand {
    self.git_cmd().args(["checkout", "--quiet", branch])
  }

  /// Remove every tracked file from the index and the working tree
  pub fn remove_all_tracked(&self) -> ProcessCommand {
    self.git_cmd().args(["rm", "-r", "-q", "--", "."])
  }

  /// Stage all additions, modifications and deletions
  pub fn add_all(&self) -> ProcessCommand {
    self.git_cmd().args(["add", "-A", "--", "."])
  }

  pub fn commit(&self, message: &str) -> ProcessCommand {
    self.git_cmd().args(["commit", "--quiet", "-m", message])
  }

  pub fn push(&self) -> ProcessCommand {
    self.git_cmd().args(["push", "--quiet"])
  }

  /// Create a git command targeting the repository path
  ///
  /// Only output-cosmetic settings are overridden.
  pub(crate) fn git_cmd(&self) -> ProcessCommand {
    ProcessCommand::new("git")
      .arg("-C")
      .arg(path_arg(&self.repo_path))
      .args(["-c", "advice.detachedHead=false"])
      .args(["-c", "core.quotePath=false"])
  }
}

/// The git subcommand of a command built by [`SystemGit`]
pub fn subcommand(cmd: &ProcessCommand) -> Option<&str> {
  if cmd.program != "git" {
    return None;
  }
  let mut args = cmd.args.iter();
  while let Some(arg) = args.next() {
    match arg.as_str() {
      "-C" | "-c" => {
        args.next();
      }
      other => return Some(other),
    }
  }
  None
}
