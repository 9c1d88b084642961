//! Promotion steps
//!
//! A promotion is three stages run in order. Each stage expands into a list
//! of [`Step`]s that are either printed (dry-run) or executed one by one.
//! Stages that need local files get their own scratch directory; the paths
//! baked into their steps point into it.

use super::namer::{ArtifactNamer, ReleaseType};
use super::request::{ARCHITECTURES, BUILD_MODE, LATEST, PromotionRequest, SYSTEMS};
use super::storage::StorageCopy;
use crate::core::config::PromoteConfig;
use crate::core::process::{ProcessCommand, path_arg};
use crate::core::vcs::SystemGit;
use std::fmt;
use std::path::{Path, PathBuf};

/// File the version marker is staged in
pub const VERSION_FILE: &str = "version";

/// Directory the downloaded docs tree lands in (last segment of the docs path)
pub const DOCS_DIR: &str = "docs";

/// Directory the docs repository is cloned into
pub const SITE_DIR: &str = "site";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  Artifacts,
  VersionMarker,
  Docs,
}

impl Stage {
  pub const ALL: [Stage; 3] = [Stage::Artifacts, Stage::VersionMarker, Stage::Docs];

  pub fn title(self) -> &'static str {
    match self {
      Stage::Artifacts => "Promoting SDK artifacts",
      Stage::VersionMarker => "Publishing version marker",
      Stage::Docs => "Republishing API docs",
    }
  }

  pub fn icon(self) -> &'static str {
    match self {
      Stage::Artifacts => "📦",
      Stage::VersionMarker => "🏷️ ",
      Stage::Docs => "📚",
    }
  }

  /// Prefix of the stage's scratch directory, if it needs one
  pub fn scratch_prefix(self) -> Option<&'static str> {
    match self {
      Stage::Artifacts => None,
      Stage::VersionMarker => Some("version"),
      Stage::Docs => Some("docs"),
    }
  }
}

/// What a step does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Run(ProcessCommand),
  WriteFile { path: PathBuf, contents: String },
  /// Copy the contents of `from` into `to`, merging directories
  CopyTree { from: PathBuf, to: PathBuf },
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Action::Run(cmd) => write!(f, "{}", cmd),
      Action::WriteFile { path, contents } => write!(f, "write '{}' to {}", contents, path.display()),
      Action::CopyTree { from, to } => write!(f, "copy {}/* to {}", from.display(), to.display()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
  /// Human readable description printed before the step runs
  pub summary: String,
  pub action: Action,
}

impl Step {
  fn new(summary: impl Into<String>, action: Action) -> Self {
    Self {
      summary: summary.into(),
      action,
    }
  }

  fn run(summary: impl Into<String>, cmd: ProcessCommand) -> Self {
    Self::new(summary, Action::Run(cmd))
  }

  pub fn command(&self) -> Option<&ProcessCommand> {
    match &self.action {
      Action::Run(cmd) => Some(cmd),
      _ => None,
    }
  }
}

/// Expands a request into concrete steps
pub struct Planner<'a> {
  request: &'a PromotionRequest,
  config: &'a PromoteConfig,
  raw: ArtifactNamer,
  release: ArtifactNamer,
}

impl<'a> Planner<'a> {
  pub fn new(request: &'a PromotionRequest, config: &'a PromoteConfig) -> Self {
    Self {
      request,
      config,
      raw: ArtifactNamer::new(&config.bucket, &config.product, config.channel, ReleaseType::Raw),
      release: ArtifactNamer::new(&config.bucket, &config.product, config.channel, ReleaseType::Release),
    }
  }

  /// Copy every raw SDK archive to each release alias
  pub fn artifact_steps(&self) -> Vec<Step> {
    let version = &self.request.version;
    let mut steps = Vec::new();

    for alias in self.request.aliases() {
      for system in SYSTEMS {
        for arch in ARCHITECTURES {
          let src = self.raw.sdk_zip_path(version, system, arch, BUILD_MODE);
          let dst = self.release.sdk_zip_path(alias, system, arch, BUILD_MODE);
          steps.push(Step::run(
            format!("Promoting {}-{} SDK to '{}'", system, arch, alias),
            StorageCopy::public(src, dst).command(&self.config.gsutil),
          ));
        }
      }
    }

    steps
  }

  /// Write the version into `scratch` and publish it as the latest marker
  pub fn version_marker_steps(&self, scratch: &Path) -> Vec<Step> {
    let file = scratch.join(VERSION_FILE);
    let target = self.release.version_path(LATEST);

    vec![
      Step::new(
        "Writing version marker",
        Action::WriteFile {
          path: file.clone(),
          contents: self.request.version.clone(),
        },
      ),
      Step::run(
        format!("Publishing {}", target),
        StorageCopy::public(path_arg(&file), target.as_str()).command(&self.config.gsutil),
      ),
    ]
  }

  /// Download the docs into `scratch` and replace the pages branch with them
  ///
  /// Everything up to the commit happens in the scratch clone; `push` is the
  /// only step that touches the remote and it runs last.
  pub fn docs_steps(&self, scratch: &Path) -> Vec<Step> {
    let version = &self.request.version;
    let docs = self.raw.docs_path(version);
    let scratch_git = SystemGit::at(scratch);
    let (clone, site) = scratch_git.clone_into(&self.config.docs_repo, SITE_DIR);

    vec![
      Step::run(
        format!("Downloading docs from {}", docs),
        StorageCopy::download_tree(docs.as_str(), path_arg(scratch)).command(&self.config.gsutil),
      ),
      Step::run(format!("Cloning {}", self.config.docs_repo), clone),
      Step::run(
        format!("Checking out {} which serves the documentation", self.config.pages_branch),
        site.checkout(&self.config.pages_branch),
      ),
      Step::run("Cleaning out old version of docs", site.remove_all_tracked()),
      Step::new(
        "Copying in new docs",
        Action::CopyTree {
          from: scratch.join(DOCS_DIR),
          to: site.repo_path().to_path_buf(),
        },
      ),
      Step::run("Staging new docs", site.add_all()),
      Step::run("Committing docs locally", site.commit(&commit_message(version))),
      Step::run("Pushing docs", site.push()),
    ]
  }
}

pub fn commit_message(version: &str) -> String {
  format!("Publish API docs for version {}", version)
}
