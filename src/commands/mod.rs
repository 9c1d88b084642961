//! Entry points for the two binaries
//!
//! Each command reads the process environment exactly once, turns it into
//! explicit values and hands them to the library code.
//!
//! - **combine**: merge static libraries (`library-combiner`)
//! - **promote**: promote an SDK version (`promote`)

pub mod combine;
pub mod promote;

pub use combine::run_combine;
pub use promote::run_promote;
