//! Configuration section definitions.
//!
//! Each module corresponds to a section in `webui-resolve.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `host`    | `[host]`     | URL scheme and namespace hosts           |
//! | `tree`    | `[tree]`     | Source/generated roots, directory layout |
//! | `resolve` | `[resolve]`  | Excluded full paths                      |
//! | `trace`   | `[trace]`    | Diagnostic trace sink                    |

mod host;
mod resolve;
mod trace;
mod tree;

pub use host::HostConfig;
pub use resolve::ResolveSectionConfig;
pub use trace::TraceConfig;
pub use tree::TreeConfig;
