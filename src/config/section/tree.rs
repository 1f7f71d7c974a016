//! `[tree]` section configuration.
//!
//! Locates the source and generated trees backing the secondary namespace.
//!
//! # Example
//!
//! ```toml
//! [tree]
//! src = "../../"                                    # source checkout root
//! gen = "../../out/Default/gen/"                    # build output root
//! root = "../../"                                   # project root (traced)
//! namespace_dir = "brave/ui/webui/resources/"       # secondary tree under src and gen
//! preprocessed_dir = "ui/webui/resources/preprocessed/"
//! script_ext = ".js"                                # compiled scripts live under gen
//! ```
//!
//! Relative roots are resolved against the directory holding the config
//! file. Roots are kept as strings because the resolver matches them as
//! prefixes; directories always end with `/` after normalization.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConfigDiagnostics, FieldPath, util::expand_tilde};
use crate::utils::path::posix;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Source tree root.
    #[serde(rename = "src")]
    pub src_path: String,
    /// Generated tree root.
    #[serde(rename = "gen")]
    pub gen_path: String,
    /// Project root. Defaults to the config directory.
    #[serde(rename = "root")]
    pub root_path: String,
    pub namespace_dir: String,
    pub preprocessed_dir: String,
    pub script_ext: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            src_path: String::new(),
            gen_path: String::new(),
            root_path: String::new(),
            namespace_dir: "brave/ui/webui/resources/".to_string(),
            preprocessed_dir: "ui/webui/resources/preprocessed/".to_string(),
            script_ext: ".js".to_string(),
        }
    }
}

impl TreeConfig {
    pub const SRC: FieldPath = FieldPath::new("tree.src");
    pub const GEN: FieldPath = FieldPath::new("tree.gen");
    pub const NAMESPACE_DIR: FieldPath = FieldPath::new("tree.namespace_dir");
    pub const PREPROCESSED_DIR: FieldPath = FieldPath::new("tree.preprocessed_dir");
    pub const SCRIPT_EXT: FieldPath = FieldPath::new("tree.script_ext");

    /// Make roots absolute relative to `base` and give directories a
    /// trailing `/`. Empty `src`/`gen` stay empty so validation can report
    /// them.
    pub fn normalize(&mut self, base: &Path) {
        let base = base.to_string_lossy();

        for dir in [&mut self.src_path, &mut self.gen_path] {
            if !dir.is_empty() {
                *dir = as_dir(&resolve_against(&base, &expand_tilde(dir)));
            }
        }
        self.root_path = as_dir(&resolve_against(&base, &expand_tilde(&self.root_path)));

        for dir in [&mut self.namespace_dir, &mut self.preprocessed_dir] {
            if !dir.is_empty() {
                *dir = as_dir(dir);
            }
        }
    }

    /// Secondary namespace inside the source tree.
    pub fn namespace_src_root(&self) -> String {
        posix::join(&self.src_path, &self.namespace_dir)
    }

    /// Secondary namespace inside the generated tree.
    pub fn namespace_gen_root(&self) -> String {
        posix::join(&self.gen_path, &self.namespace_dir)
    }

    /// Preprocessed resources inside the generated tree.
    pub fn preprocessed_gen_dir(&self) -> String {
        posix::join(&self.gen_path, &self.preprocessed_dir)
    }

    /// Call after `normalize`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.src_path.is_empty() {
            diag.error_with_hint(Self::SRC, "source root is required", "set it or pass --src");
        }
        if self.gen_path.is_empty() {
            diag.error_with_hint(Self::GEN, "generated root is required", "set it or pass --gen");
        }
        if self.namespace_dir.is_empty() {
            diag.error(Self::NAMESPACE_DIR, "must not be empty");
        } else if self.namespace_dir.starts_with('/') {
            diag.error(Self::NAMESPACE_DIR, "must be relative to tree.src and tree.gen");
        }
        if self.preprocessed_dir.is_empty() {
            diag.error(Self::PREPROCESSED_DIR, "must not be empty");
        }
        if !self.script_ext.starts_with('.') || self.script_ext.len() < 2 {
            diag.error(
                Self::SCRIPT_EXT,
                format!("'{}' must look like '.js'", self.script_ext),
            );
        }

        if self.src_path.is_empty() || self.gen_path.is_empty() || self.namespace_dir.is_empty() {
            return;
        }

        let src_root = self.namespace_src_root();
        let gen_root = self.namespace_gen_root();
        if src_root.starts_with(&gen_root) || gen_root.starts_with(&src_root) {
            diag.error_with_hint(
                Self::GEN,
                format!("namespace roots overlap: '{src_root}' and '{gen_root}'"),
                "source and generated trees must be disjoint",
            );
        }
    }
}

/// Absolute paths are kept, relative ones are joined onto `base`.
fn resolve_against(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        posix::normalize(path)
    } else {
        posix::join(base, path)
    }
}

fn as_dir(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn tree(src: &str, generated: &str) -> TreeConfig {
        TreeConfig {
            src_path: src.to_string(),
            gen_path: generated.to_string(),
            ..TreeConfig::default()
        }
    }

    #[test]
    fn test_tree_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.tree.namespace_dir, "brave/ui/webui/resources/");
        assert_eq!(config.tree.preprocessed_dir, "ui/webui/resources/preprocessed/");
        assert_eq!(config.tree.script_ext, ".js");
    }

    #[test]
    fn test_tree_normalize_relative_roots() {
        let mut tree = tree("../src", "out/gen");
        tree.namespace_dir = "brave/res".to_string();
        tree.normalize(Path::new("/work/build"));

        assert_eq!(tree.src_path, "/work/src/");
        assert_eq!(tree.gen_path, "/work/build/out/gen/");
        assert_eq!(tree.root_path, "/work/build/");
        assert_eq!(tree.namespace_dir, "brave/res/");
    }

    #[test]
    fn test_tree_normalize_absolute_roots() {
        let mut tree = tree("/abs/src/", "/abs/gen");
        tree.normalize(Path::new("/elsewhere"));
        assert_eq!(tree.src_path, "/abs/src/");
        assert_eq!(tree.gen_path, "/abs/gen/");
    }

    #[test]
    fn test_tree_namespace_roots() {
        let tree = tree("/s/", "/g/");
        assert_eq!(tree.namespace_src_root(), "/s/brave/ui/webui/resources/");
        assert_eq!(tree.namespace_gen_root(), "/g/brave/ui/webui/resources/");
        assert_eq!(tree.preprocessed_gen_dir(), "/g/ui/webui/resources/preprocessed/");
    }

    #[test]
    fn test_tree_validate_ok() {
        let mut diag = ConfigDiagnostics::new();
        tree("/s/", "/g/").validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_tree_validate_missing_roots() {
        let mut diag = ConfigDiagnostics::new();
        tree("", "").validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![TreeConfig::SRC, TreeConfig::GEN]);
    }

    #[test]
    fn test_tree_validate_overlap() {
        let mut diag = ConfigDiagnostics::new();
        tree("/out/", "/out/").validate(&mut diag);
        assert!(diag.errors().iter().any(|e| e.message.contains("overlap")));
    }

    #[test]
    fn test_tree_validate_script_ext() {
        let mut config = tree("/s/", "/g/");
        config.script_ext = "js".to_string();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, TreeConfig::SCRIPT_EXT);
    }
}
