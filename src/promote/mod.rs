//! SDK release promotion
//!
//! Promotes a built SDK version from the raw channel to the release channel:
//!
//! 1. copy each SDK archive to the `<version>` and `latest` release aliases
//! 2. publish `<version>` as the `latest` version marker
//! 3. replace the docs site's pages branch with the version's API docs
//!
//! With `--dryrun` every step is printed instead of executed.

pub mod namer;
pub mod plan;
pub mod request;
pub mod storage;
pub mod workflow;

pub use namer::{ArtifactNamer, Channel, ReleaseType};
pub use plan::{Action, Planner, Stage, Step};
pub use request::PromotionRequest;
pub use workflow::{Promotion, PromotionSummary, promote};
