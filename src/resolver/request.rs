//! Resolution request and result types.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};
use std::fmt;

/// One import edge: the specifier and the file that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveRequest<'a> {
    /// Raw import specifier as written in the module.
    pub source: &'a str,
    /// Absolute path of the importing file. `None` for entry points.
    pub origin: Option<&'a str>,
}

impl<'a> ResolveRequest<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            origin: None,
        }
    }

    pub const fn with_origin(source: &'a str, origin: &'a str) -> Self {
        Self {
            source,
            origin: Some(origin),
        }
    }
}

/// Outcome of resolving one import edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Fall through to the bundler's default resolution.
    Unhandled,

    /// Do not bundle; reference by id.
    External { id: String },

    /// Load the module from this absolute path.
    ResolvedPath { absolute_path: String },
}

impl Resolution {
    pub const fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled)
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }

    /// Value a bundler `resolveId` hook returns for this outcome:
    /// `null`, `{ "id": .., "external": true }`, or the path string.
    pub fn to_hook_value(&self) -> JsonValue {
        match self {
            Self::Unhandled => JsonValue::Null,
            Self::External { id } => json!({ "id": id, "external": true }),
            Self::ResolvedPath { absolute_path } => JsonValue::String(absolute_path.clone()),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unhandled => write!(f, "unhandled"),
            Self::External { id } => write!(f, "external {id}"),
            Self::ResolvedPath { absolute_path } => write!(f, "{absolute_path}"),
        }
    }
}
