//! Resolution context: everything derived once from the configuration.

use rustc_hash::FxHashSet;

use crate::config::ResolverConfig;
use crate::logger::{TraceLog, TraceRecord};
use crate::utils::path::{PathOps, Posix};

/// URL prefixes of the canonical and secondary namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixes {
    /// `chrome://resources/`
    pub canonical: String,
    /// `//resources/`
    pub canonical_relative: String,
    /// `chrome://brave-resources/`
    pub namespace: String,
    /// `//brave-resources/`
    pub namespace_relative: String,
}

impl Prefixes {
    /// Starts with the canonical prefix in either form.
    pub fn is_canonical(&self, source: &str) -> bool {
        source.starts_with(&self.canonical) || source.starts_with(&self.canonical_relative)
    }

    /// Contains the secondary namespace in either form.
    pub fn mentions_namespace(&self, source: &str) -> bool {
        source.contains(&self.namespace) || source.contains(&self.namespace_relative)
    }

    /// Strip the secondary namespace prefix, scheme-qualified form first.
    pub fn strip_namespace<'a>(&self, source: &'a str) -> Option<&'a str> {
        source
            .strip_prefix(self.namespace.as_str())
            .or_else(|| source.strip_prefix(self.namespace_relative.as_str()))
    }
}

/// Immutable per-build state shared by every resolution call.
///
/// Built once from a validated [`ResolverConfig`]; `Send + Sync`, so
/// callers may resolve edges in parallel against one context.
#[derive(Debug)]
pub struct ResolveContext<P: PathOps = Posix> {
    pub(super) src_path: String,
    pub(super) gen_path: String,
    pub(super) root_path: String,
    pub(super) host_url: String,
    pub(super) prefixes: Prefixes,
    pub(super) namespace_src_root: String,
    pub(super) namespace_gen_root: String,
    pub(super) preprocessed_dirs: [String; 2],
    pub(super) script_ext: String,
    pub(super) excludes: FxHashSet<String>,
    pub(super) paths: P,
    pub(super) trace: TraceLog,
}

impl ResolveContext<Posix> {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::with_paths(config, Posix)
    }
}

impl<P: PathOps> ResolveContext<P> {
    /// Build a context using custom path collaborators.
    ///
    /// Roots come from [`TreeConfig`](crate::config::TreeConfig), the same
    /// values config validation checked; `paths` only serves resolution.
    pub fn with_paths(config: &ResolverConfig, paths: P) -> Self {
        let host = &config.host;
        let tree = &config.tree;

        let prefixes = Prefixes {
            canonical: host.canonical_prefix(),
            canonical_relative: host.canonical_relative_prefix(),
            namespace: host.namespace_prefix(),
            namespace_relative: host.namespace_relative_prefix(),
        };

        // Matched verbatim, and under the generated root.
        let preprocessed_dirs = [tree.preprocessed_dir.clone(), tree.preprocessed_gen_dir()];

        Self {
            src_path: tree.src_path.clone(),
            gen_path: tree.gen_path.clone(),
            root_path: tree.root_path.clone(),
            host_url: host.host_url(),
            prefixes,
            namespace_src_root: tree.namespace_src_root(),
            namespace_gen_root: tree.namespace_gen_root(),
            preprocessed_dirs,
            script_ext: tree.script_ext.clone(),
            excludes: config.resolve.exclude_set(),
            paths,
            trace: TraceLog::disabled(),
        }
    }

    /// Attach a diagnostic trace sink.
    pub fn with_trace(mut self, trace: TraceLog) -> Self {
        self.trace = trace;
        self
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    pub fn namespace_src_root(&self) -> &str {
        &self.namespace_src_root
    }

    pub fn namespace_gen_root(&self) -> &str {
        &self.namespace_gen_root
    }

    pub fn excludes(&self) -> &FxHashSet<String> {
        &self.excludes
    }

    pub fn is_tracing(&self) -> bool {
        self.trace.is_enabled()
    }

    /// Origin sits in the generated-preprocessed-resources directory.
    pub(super) fn is_preprocessed(&self, origin: &str) -> bool {
        self.preprocessed_dirs
            .iter()
            .any(|dir| origin.starts_with(dir.as_str()))
    }

    pub(super) fn record(&self, source: &str, origin: Option<&str>) {
        if !self.trace.is_enabled() {
            return;
        }
        self.trace.write(&TraceRecord {
            src_path: &self.src_path,
            gen_path: &self.gen_path,
            root_path: &self.root_path,
            host_url: &self.host_url,
            source,
            origin,
        });
    }
}
