//! `[resolve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [resolve]
//! # Full canonical URLs the bundler must leave external
//! excludes = ["chrome://resources/js/cr.m.js"]
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveSectionConfig {
    pub excludes: Vec<String>,
}

impl ResolveSectionConfig {
    pub const EXCLUDES: FieldPath = FieldPath::new("resolve.excludes");

    /// Deduplicated lookup set.
    pub fn exclude_set(&self) -> FxHashSet<String> {
        self.excludes.iter().cloned().collect()
    }

    /// Entries that do not start with `canonical_prefix` can never match a
    /// computed full path.
    pub fn validate(&self, canonical_prefix: &str, diag: &mut ConfigDiagnostics) {
        for (i, entry) in self.excludes.iter().enumerate() {
            if entry.is_empty() {
                diag.error(Self::EXCLUDES, format!("[{i}] empty entry"));
            } else if !entry.starts_with(canonical_prefix) {
                diag.warn(
                    Self::EXCLUDES,
                    format!("[{i}] '{entry}' does not start with '{canonical_prefix}' and never matches"),
                );
            }
        }
    }
}
