//! Shared building blocks for the release tools
//!
//! - **config**: environment-derived tool locations and release constants
//! - **error**: error types with exit codes and contextual help
//! - **logging**: `tracing` subscriber setup
//! - **process**: structured external commands and the executor seam
//! - **vcs**: git command construction (SystemGit)

pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod vcs;
