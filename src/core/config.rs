//! Environment-derived configuration
//!
//! The tools take no configuration file. Tool locations and release
//! constants have defaults that can be overridden through environment
//! variables; they are read once at the entry point and passed down as plain
//! values. Empty variables count as unset.

use crate::promote::namer::Channel;

/// Build configuration name variable (e.g. `ReleaseX64`, `DebugSTM`)
pub const CONFIGURATION_VAR: &str = "CONFIGURATION";

/// Read a variable from the process environment, ignoring empty values
pub fn env_lookup(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Archiver executables, one per supported target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiverConfig {
  /// Cross-compiling archiver for microcontroller targets
  pub embedded_ar: String,
  pub ar: String,
  pub libtool: String,
  pub lib_exe: String,
}

impl Default for ArchiverConfig {
  fn default() -> Self {
    Self {
      embedded_ar: "arm-none-eabi-ar".to_string(),
      ar: "ar".to_string(),
      libtool: "libtool".to_string(),
      lib_exe: "lib.exe".to_string(),
    }
  }
}

impl ArchiverConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(env_lookup)
  }

  /// Build from an arbitrary variable source
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = Self::default();
    Self {
      embedded_ar: lookup("EMBEDDED_AR").unwrap_or(defaults.embedded_ar),
      ar: lookup("AR").unwrap_or(defaults.ar),
      libtool: lookup("LIBTOOL").unwrap_or(defaults.libtool),
      lib_exe: lookup("LIB_EXE").unwrap_or(defaults.lib_exe),
    }
  }
}

/// Storage and documentation settings for promotion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoteConfig {
  pub gsutil: String,
  /// Bucket URL, without trailing slash
  pub bucket: String,
  /// Artifact file-name prefix
  pub product: String,
  /// Release track promotions read from and write to
  pub channel: Channel,
  pub docs_repo: String,
  pub pages_branch: String,
}

impl Default for PromoteConfig {
  fn default() -> Self {
    Self {
      gsutil: "gsutil".to_string(),
      bucket: "gs://dartino-archive".to_string(),
      product: "dartino".to_string(),
      // Currently we only release on dev
      channel: Channel::Dev,
      docs_repo: "git@github.com:dartino/api.git".to_string(),
      pages_branch: "gh-pages".to_string(),
    }
  }
}

impl PromoteConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(env_lookup)
  }

  /// Build from an arbitrary variable source
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = Self::default();
    Self {
      gsutil: lookup("GSUTIL").unwrap_or(defaults.gsutil),
      bucket: lookup("SDK_RELEASE_BUCKET")
        .map(|b| b.trim_end_matches('/').to_string())
        .unwrap_or(defaults.bucket),
      product: lookup("SDK_RELEASE_PRODUCT").unwrap_or(defaults.product),
      channel: defaults.channel,
      docs_repo: lookup("SDK_RELEASE_DOCS_REPO").unwrap_or(defaults.docs_repo),
      pages_branch: lookup("SDK_RELEASE_PAGES_BRANCH").unwrap_or(defaults.pages_branch),
    }
  }
}
