//! Path utilities.
//!
//! Pure functions for path manipulation.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`)
//! - [`posix`]: Lexical POSIX operations injected into the resolver (`PathOps`)

pub mod fs;
pub mod posix;

pub use fs::normalize_path;
pub use posix::{PathOps, Posix};
