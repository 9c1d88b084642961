//! Error types for the release tools with contextual messages and exit codes
//!
//! Every failure the tools can hit falls into one of a few categories: a bad
//! request, an external process that could not be spawned or exited non-zero,
//! a host we have no archiver for, or plain I/O. Each category maps to a
//! stable exit code so CI wrappers can tell them apart.

use std::fmt;
use std::io;

/// Exit codes for the release tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid request, bad configuration)
  User = 1,
  /// System error (external tool failure, I/O)
  System = 2,
  /// Unsupported build environment
  Platform = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for the release tools
#[derive(Debug)]
pub enum ReleaseError {
  /// Malformed requests or configuration
  Config(ConfigError),

  /// External process failures
  Process(ProcessError),

  /// Build environment not covered by any archiver
  Platform(PlatformError),

  /// I/O errors, with what was being attempted when known
  Io {
    source: io::Error,
    context: Option<String>,
  },
}

impl ReleaseError {
  /// Add context to an existing error
  ///
  /// Only I/O errors take context; process and platform errors already name
  /// the command or host that failed.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    match self {
      ReleaseError::Io { source, context } => {
        let ctx_str = ctx.into();
        ReleaseError::Io {
          source,
          context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        }
      }
      other => other,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::Process(_) => ExitCode::System,
      ReleaseError::Platform(_) => ExitCode::Platform,
      ReleaseError::Io { .. } => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Process(e) => e.help_message(),
      ReleaseError::Platform(e) => e.help_message(),
      ReleaseError::Io { .. } => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::Process(e) => write!(f, "{}", e),
      ReleaseError::Platform(e) => write!(f, "{}", e),
      ReleaseError::Io { source, context: None } => write!(f, "I/O error: {}", source),
      ReleaseError::Io {
        source,
        context: Some(ctx),
      } => write!(f, "{}\nI/O error: {}", ctx, source),
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io { source, .. } => Some(source),
      ReleaseError::Process(ProcessError::Spawn { source, .. }) => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io {
      source: err,
      context: None,
    }
  }
}

impl From<ConfigError> for ReleaseError {
  fn from(err: ConfigError) -> Self {
    ReleaseError::Config(err)
  }
}

impl From<ProcessError> for ReleaseError {
  fn from(err: ProcessError) -> Self {
    ReleaseError::Process(err)
  }
}

impl From<PlatformError> for ReleaseError {
  fn from(err: PlatformError) -> Self {
    ReleaseError::Platform(err)
  }
}

/// Request and configuration errors
#[derive(Debug)]
pub enum ConfigError {
  /// No output library was given
  MissingOutput,

  /// Version identifier is empty
  EmptyVersion,
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::MissingOutput => {
        Some("Pass the input libraries followed by the output library path.".to_string())
      }
      ConfigError::EmptyVersion => Some("Pass the version to promote, e.g. `--version 0.3.0`.".to_string()),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::MissingOutput => write!(f, "No output library given"),
      ConfigError::EmptyVersion => write!(f, "Version identifier must not be empty"),
    }
  }
}

/// External process errors
#[derive(Debug)]
pub enum ProcessError {
  /// The program could not be started at all
  Spawn { program: String, source: io::Error },

  /// The program ran and exited unsuccessfully
  Failed { command: String, code: Option<i32> },
}

impl ProcessError {
  fn help_message(&self) -> Option<String> {
    match self {
      ProcessError::Spawn { program, source } if source.kind() == io::ErrorKind::NotFound => Some(format!(
        "'{}' was not found on PATH. Install it or point the matching environment variable at it.",
        program
      )),
      ProcessError::Failed { command, .. } if command.starts_with("git") && command.contains(" push") => {
        Some("The local docs commit was not published. Check your SSH access to the docs repository.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ProcessError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProcessError::Spawn { program, source } => {
        write!(f, "Failed to start '{}': {}", program, source)
      }
      ProcessError::Failed { command, code: Some(code) } => {
        write!(f, "Command failed with exit code {}: {}", code, command)
      }
      ProcessError::Failed { command, code: None } => {
        write!(f, "Command terminated by signal: {}", command)
      }
    }
  }
}

/// Build environment errors
#[derive(Debug)]
pub enum PlatformError {
  /// Host OS has no archiver and the configuration is not embedded
  UnsupportedHost { os: String, configuration: Option<String> },
}

impl PlatformError {
  fn help_message(&self) -> Option<String> {
    match self {
      PlatformError::UnsupportedHost { .. } => Some(
        "Supported hosts are linux, macos and windows. Embedded builds need CONFIGURATION ending in STM, CM4 or CM4SF."
          .to_string(),
      ),
    }
  }
}

impl fmt::Display for PlatformError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PlatformError::UnsupportedHost {
        os,
        configuration: Some(configuration),
      } => write!(
        f,
        "No archiver for host '{}' with configuration '{}'",
        os, configuration
      ),
      PlatformError::UnsupportedHost { os, configuration: None } => {
        write!(f, "No archiver for host '{}'", os)
      }
    }
  }
}

/// Result type alias for the release tools
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
