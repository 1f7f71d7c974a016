//! `[trace]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [trace]
//! enable = true          # record every resolution call
//! file = "resolve.log"   # append here; stderr when omitted
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::util::expand_tilde;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub enable: bool,
    pub file: Option<PathBuf>,
}

impl TraceConfig {
    /// Resolve a relative trace file against `base`.
    pub fn normalize(&mut self, base: &Path) {
        if let Some(file) = self.file.take() {
            let expanded = PathBuf::from(expand_tilde(&file.to_string_lossy()));
            self.file = Some(if expanded.is_relative() {
                base.join(expanded)
            } else {
                expanded
            });
        }
    }
}
