//! Build pipeline helpers for the SDK
//!
//! Two tools share this library:
//!
//! - `library-combiner` merges static libraries with the archiver that fits
//!   the build target ([`archive`])
//! - `promote` publishes a built SDK version to the release channel and
//!   republishes its API docs ([`promote`])
//!
//! Both are thin layers over external tools; every process they start goes
//! through [`crate::core::process::CommandExecutor`].

pub mod archive;
pub mod cli;
pub mod commands;
pub mod core;
pub mod promote;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
