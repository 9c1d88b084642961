//! Storage path naming
//!
//! Layout of the release bucket:
//!
//! ```text
//! <bucket>/channels/<channel>/<release-type>/<version>/
//!   sdk/<product>-sdk-<system>-<arch>-<mode>.zip
//!   docs/
//!   VERSION
//! ```

use std::fmt;

/// Release track
///
/// Promotion only ever works within the dev channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
  Dev,
}

impl Channel {
  pub fn as_str(self) -> &'static str {
    match self {
      Channel::Dev => "dev",
    }
  }
}

/// Stage of an artifact within a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
  /// As produced by the build bots
  Raw,
  /// Promoted for distribution
  Release,
}

impl ReleaseType {
  pub fn as_str(self) -> &'static str {
    match self {
      ReleaseType::Raw => "raw",
      ReleaseType::Release => "release",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
  Linux,
  Mac,
}

impl System {
  /// Name used in artifact file names
  pub fn file_name(self) -> &'static str {
    match self {
      System::Linux => "linux",
      System::Mac => "macos",
    }
  }
}

impl fmt::Display for System {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      System::Linux => "linux",
      System::Mac => "mac",
    };
    write!(f, "{}", name)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
  X64,
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Arch::X64 => write!(f, "x64"),
    }
  }
}

/// Computes bucket paths for one channel and release type
#[derive(Debug, Clone)]
pub struct ArtifactNamer {
  bucket: String,
  product: String,
  channel: Channel,
  release_type: ReleaseType,
}

impl ArtifactNamer {
  pub fn new(bucket: &str, product: &str, channel: Channel, release_type: ReleaseType) -> Self {
    Self {
      bucket: bucket.trim_end_matches('/').to_string(),
      product: product.to_string(),
      channel,
      release_type,
    }
  }

  pub fn release_directory(&self, version: &str) -> String {
    format!(
      "{}/channels/{}/{}/{}",
      self.bucket,
      self.channel.as_str(),
      self.release_type.as_str(),
      version
    )
  }

  pub fn sdk_zip_filename(&self, system: System, arch: Arch, mode: &str) -> String {
    format!("{}-sdk-{}-{}-{}.zip", self.product, system.file_name(), arch, mode)
  }

  pub fn sdk_zip_path(&self, version: &str, system: System, arch: Arch, mode: &str) -> String {
    format!(
      "{}/sdk/{}",
      self.release_directory(version),
      self.sdk_zip_filename(system, arch, mode)
    )
  }

  pub fn version_path(&self, version: &str) -> String {
    format!("{}/VERSION", self.release_directory(version))
  }

  pub fn docs_path(&self, version: &str) -> String {
    format!("{}/docs", self.release_directory(version))
  }
}
