use super::namer::{Arch, System};
use crate::core::error::{ConfigError, ReleaseResult};

/// Alias that always points at the newest promoted version
pub const LATEST: &str = "latest";

/// Build mode of the promoted SDK archives
pub const BUILD_MODE: &str = "release";

/// Systems an SDK is built for
pub const SYSTEMS: [System; 2] = [System::Linux, System::Mac];

pub const ARCHITECTURES: [Arch; 1] = [Arch::X64];

/// A single promotion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionRequest {
  pub version: String,
  pub dry_run: bool,
}

impl PromotionRequest {
  pub fn new(version: impl Into<String>, dry_run: bool) -> ReleaseResult<Self> {
    let version = version.into();
    if version.trim().is_empty() {
      return Err(ConfigError::EmptyVersion.into());
    }
    Ok(Self { version, dry_run })
  }

  /// Release-channel names the artifacts are published under
  pub fn aliases(&self) -> [&str; 2] {
    [self.version.as_str(), LATEST]
  }
}
