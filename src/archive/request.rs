use crate::core::error::{ConfigError, ReleaseResult};
use std::path::PathBuf;

/// Libraries to merge and where to put the result
///
/// Input order is significant: when two inputs define the same member the
/// later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryBuildRequest {
  pub inputs: Vec<PathBuf>,
  pub output: PathBuf,
}

impl LibraryBuildRequest {
  /// Split command-line arguments; the last one is always the output
  pub fn from_args<I, S>(args: I) -> ReleaseResult<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<PathBuf>,
  {
    let mut inputs: Vec<PathBuf> = args.into_iter().map(Into::into).collect();
    let output = inputs.pop().ok_or(ConfigError::MissingOutput)?;
    Ok(Self { inputs, output })
  }
}
