//! Promotion execution
//!
//! Runs the stages of a [`Planner`] strictly in order and stops at the first
//! failure. There is no rollback: anything already copied to the bucket stays
//! there. The docs stage only touches the remote with its final push.

use super::plan::{Action, Planner, Stage, Step};
use super::request::PromotionRequest;
use crate::core::config::PromoteConfig;
use crate::core::error::{ReleaseResult, ResultExt};
use crate::core::process::CommandExecutor;
use crate::utils::copy_tree;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a successful promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromotionSummary {
  pub stages: usize,
  pub steps: usize,
  pub dry_run: bool,
}

pub struct Promotion<'a> {
  request: &'a PromotionRequest,
  planner: Planner<'a>,
  executor: &'a dyn CommandExecutor,
}

impl<'a> Promotion<'a> {
  pub fn new(request: &'a PromotionRequest, config: &'a PromoteConfig, executor: &'a dyn CommandExecutor) -> Self {
    Self {
      request,
      planner: Planner::new(request, config),
      executor,
    }
  }

  pub fn run(&self) -> ReleaseResult<PromotionSummary> {
    let mut summary = PromotionSummary {
      dry_run: self.request.dry_run,
      ..Default::default()
    };

    for stage in Stage::ALL {
      println!("{} {}", stage.icon(), stage.title());
      summary.steps += self.run_stage(stage)?;
      summary.stages += 1;
      println!();
    }

    Ok(summary)
  }

  fn run_stage(&self, stage: Stage) -> ReleaseResult<usize> {
    match stage {
      Stage::Artifacts => self.run_steps(&self.planner.artifact_steps()),
      Stage::VersionMarker => self.with_scratch(stage, |dir| self.planner.version_marker_steps(dir)),
      Stage::Docs => self.with_scratch(stage, |dir| self.planner.docs_steps(dir)),
    }
  }

  /// Run a stage's steps inside its own temporary directory
  ///
  /// The directory is removed when this returns, whether the steps succeeded
  /// or not. Dry runs never create it.
  fn with_scratch(&self, stage: Stage, build: impl FnOnce(&Path) -> Vec<Step>) -> ReleaseResult<usize> {
    let prefix = stage.scratch_prefix().unwrap_or("promote");

    if self.request.dry_run {
      let placeholder = std::env::temp_dir().join(format!("{}.XXXXXX", prefix));
      return self.run_steps(&build(&placeholder));
    }

    let scratch = tempfile::Builder::new()
      .prefix(&format!("{}.", prefix))
      .tempdir()
      .context("Failed to create temporary directory")?;
    debug!(path = %scratch.path().display(), "created scratch directory");

    let ran = self.run_steps(&build(scratch.path()))?;

    scratch
      .close()
      .context("Failed to remove temporary directory")?;
    Ok(ran)
  }

  fn run_steps(&self, steps: &[Step]) -> ReleaseResult<usize> {
    for step in steps {
      self.execute(step)?;
    }
    Ok(steps.len())
  }

  fn execute(&self, step: &Step) -> ReleaseResult<()> {
    if self.request.dry_run {
      println!("DRY: {}", step.action);
      return Ok(());
    }

    println!("   {}", step.summary);
    match &step.action {
      Action::Run(cmd) => {
        println!("   Running: {}", cmd);
        self.executor.run(cmd)
      }
      Action::WriteFile { path, contents } => {
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
      }
      Action::CopyTree { from, to } => {
        let copied = copy_tree(from, to)
          .with_context(|| format!("Failed to copy {} into {}", from.display(), to.display()))?;
        info!(files = copied, "copied tree");
        Ok(())
      }
    }
  }
}

/// Promote `request` using `config`, running commands through `executor`
pub fn promote(
  request: &PromotionRequest,
  config: &PromoteConfig,
  executor: &dyn CommandExecutor,
) -> ReleaseResult<PromotionSummary> {
  Promotion::new(request, config, executor).run()
}
