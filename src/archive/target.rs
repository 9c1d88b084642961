//! Build target resolution
//!
//! Which archiver merges the libraries depends on two signals: the build
//! configuration name (microcontroller builds carry a fixed suffix) and the
//! host operating system. Both are resolved once by the caller and passed in.

use crate::core::error::{PlatformError, ReleaseResult};
use std::fmt;

/// Configuration-name suffixes of microcontroller targets
pub const EMBEDDED_SUFFIXES: &[&str] = &["STM", "CM4", "CM4SF"];

/// Build configuration name, e.g. `ReleaseIA32` or `DebugCM4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration(String);

impl Configuration {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Whether this configuration cross-compiles for a microcontroller
  pub fn is_embedded(&self) -> bool {
    EMBEDDED_SUFFIXES.iter().any(|suffix| self.0.ends_with(suffix))
  }
}

impl fmt::Display for Configuration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Host operating system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
  Linux,
  MacOs,
  Windows,
  Other(String),
}

impl HostOs {
  /// Probe the OS this binary was built for
  pub fn detect() -> Self {
    Self::from_identifier(std::env::consts::OS)
  }

  pub fn from_identifier(os: &str) -> Self {
    match os {
      "linux" => HostOs::Linux,
      "macos" => HostOs::MacOs,
      "windows" => HostOs::Windows,
      other => HostOs::Other(other.to_string()),
    }
  }

  pub fn identifier(&self) -> &str {
    match self {
      HostOs::Linux => "linux",
      HostOs::MacOs => "macos",
      HostOs::Windows => "windows",
      HostOs::Other(os) => os,
    }
  }
}

/// The archiver family used to merge libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiverKind {
  /// Cross-compiling `ar` driven by an uppercase MRI script
  EmbeddedAr,
  /// Native `ar` driven by a lowercase MRI script
  Ar,
  /// `libtool -static`
  Libtool,
  /// `lib.exe /out:`
  LibExe,
}

impl ArchiverKind {
  /// Pick the archiver for a configuration and host.
  ///
  /// An embedded configuration wins regardless of host. Otherwise the host
  /// decides; hosts without an archiver are an error.
  pub fn select(configuration: Option<&Configuration>, host: &HostOs) -> ReleaseResult<Self> {
    if configuration.is_some_and(Configuration::is_embedded) {
      return Ok(ArchiverKind::EmbeddedAr);
    }

    match host {
      HostOs::Linux => Ok(ArchiverKind::Ar),
      HostOs::MacOs => Ok(ArchiverKind::Libtool),
      HostOs::Windows => Ok(ArchiverKind::LibExe),
      HostOs::Other(os) => Err(
        PlatformError::UnsupportedHost {
          os: os.clone(),
          configuration: configuration.map(|c| c.to_string()),
        }
        .into(),
      ),
    }
  }
}

impl fmt::Display for ArchiverKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ArchiverKind::EmbeddedAr => "embedded ar",
      ArchiverKind::Ar => "ar",
      ArchiverKind::Libtool => "libtool",
      ArchiverKind::LibExe => "lib.exe",
    };
    write!(f, "{}", name)
  }
}
