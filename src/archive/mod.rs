//! Static library merging
//!
//! Merges several static libraries into one with whichever archiver fits the
//! build target:
//!
//! | configuration / host   | tool                          |
//! |------------------------|-------------------------------|
//! | ends in STM/CM4/CM4SF  | `arm-none-eabi-ar -M` (MRI)   |
//! | linux                  | `ar -M` (MRI)                 |
//! | macos                  | `libtool -static -o`          |
//! | windows                | `lib.exe /out:`               |
//!
//! Exactly one external process is spawned per merge. Inputs are not checked
//! for existence; the archiver reports missing files itself.

pub mod invocation;
pub mod request;
pub mod target;

pub use invocation::build_command;
pub use request::LibraryBuildRequest;
pub use target::{ArchiverKind, Configuration, HostOs};

use crate::core::config::ArchiverConfig;
use crate::core::error::ReleaseResult;
use crate::core::process::CommandExecutor;
use tracing::info;

/// Merge the request's inputs into its output library
///
/// Returns the archiver that was used.
pub fn combine(
  request: &LibraryBuildRequest,
  configuration: Option<&Configuration>,
  host: &HostOs,
  tools: &ArchiverConfig,
  executor: &dyn CommandExecutor,
) -> ReleaseResult<ArchiverKind> {
  let kind = ArchiverKind::select(configuration, host)?;
  let command = build_command(kind, request, tools);

  info!(
    archiver = %kind,
    inputs = request.inputs.len(),
    output = %request.output.display(),
    "combining libraries"
  );
  executor.run(&command)?;

  Ok(kind)
}
