//! `promote` - publish an SDK version to the release channel

use crate::core::config::PromoteConfig;
use crate::core::error::ReleaseResult;
use crate::core::process::SystemExecutor;
use crate::promote::{PromotionRequest, promote};

/// Run the promote command
pub fn run_promote(version: String, dry_run: bool) -> ReleaseResult<()> {
  let request = PromotionRequest::new(version, dry_run)?;
  let config = PromoteConfig::from_env();

  if dry_run {
    println!("🔍 Dry-run: promoting {} (nothing will be changed)", request.version);
  } else {
    println!("🚀 Promoting {}", request.version);
  }
  println!();

  let summary = promote(&request, &config, &SystemExecutor)?;

  if summary.dry_run {
    println!("🔍 Dry-run complete: {} step(s) planned", summary.steps);
  } else {
    println!("✅ Promoted {} ({} step(s))", request.version, summary.steps);
  }
  Ok(())
}
