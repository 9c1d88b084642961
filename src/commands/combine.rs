//! `library-combiner` - merge static libraries

use crate::archive::{self, Configuration, HostOs, LibraryBuildRequest};
use crate::core::config::{ArchiverConfig, CONFIGURATION_VAR, env_lookup};
use crate::core::error::ReleaseResult;
use crate::core::process::SystemExecutor;
use tracing::debug;

/// Run the combine command
///
/// `libraries` holds the inputs followed by the output path.
pub fn run_combine(libraries: Vec<String>) -> ReleaseResult<()> {
  let request = LibraryBuildRequest::from_args(libraries)?;
  let configuration = env_lookup(CONFIGURATION_VAR).map(Configuration::new);
  let host = HostOs::detect();
  let tools = ArchiverConfig::from_env();

  debug!(?configuration, host = host.identifier(), "resolved build target");

  archive::combine(&request, configuration.as_ref(), &host, &tools, &SystemExecutor)?;
  Ok(())
}
