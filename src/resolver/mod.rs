//! Resource path resolution for WebUI module bundling.
//!
//! Decides, for one import edge, whether the bundler should handle the import
//! itself, record it as external, or load it from the source or generated
//! tree backing the secondary resource namespace.
//!
//! # Decision order
//!
//! ```text
//! canonical prefix, no namespace mention      -> Unhandled
//! origin in preprocessed dir, no mention      -> Unhandled
//! path from namespace root, first match wins:
//!   chrome://brave-resources/…  |  //brave-resources/…
//!   origin under src namespace root (relative import)
//!   origin under gen namespace root (relative import)
//!   otherwise                                 -> Unhandled
//! chrome://resources/<path> excluded          -> External
//! <path> ends with script ext                 -> gen root
//! anything else                               -> src root
//! ```

mod context;
mod request;

pub use context::ResolveContext;
pub use request::{Resolution, ResolveRequest};

use crate::utils::path::PathOps;

/// Resolve one import edge against `context`.
///
/// Never fails: anything unrecognized is `Unhandled`. The only side effect
/// is the optional trace record.
pub fn resolve<P: PathOps>(
    request: &ResolveRequest<'_>,
    context: &ResolveContext<P>,
) -> Resolution {
    let ResolveRequest { source, origin } = *request;
    context.record(source, origin);

    if source.is_empty() {
        return Resolution::Unhandled;
    }

    let prefixes = context.prefixes();
    let mentions_namespace = prefixes.mentions_namespace(source);

    if prefixes.is_canonical(source) && !mentions_namespace {
        return Resolution::Unhandled;
    }

    if origin.is_some_and(|o| context.is_preprocessed(o)) && !mentions_namespace {
        return Resolution::Unhandled;
    }

    let Some(path) = path_from_namespace_root(source, origin, context) else {
        return Resolution::Unhandled;
    };

    let full_path = format!("{}{}", prefixes.canonical, path);
    if context.excludes().contains(&full_path) {
        return Resolution::External { id: full_path };
    }

    let root = if path.ends_with(context.script_ext.as_str()) {
        context.namespace_gen_root()
    } else {
        context.namespace_src_root()
    };

    Resolution::ResolvedPath {
        absolute_path: context.paths.join(root, &path),
    }
}

/// Location of `source` relative to the secondary namespace root.
fn path_from_namespace_root<P: PathOps>(
    source: &str,
    origin: Option<&str>,
    context: &ResolveContext<P>,
) -> Option<String> {
    if let Some(rest) = context.prefixes().strip_namespace(source) {
        return Some(rest.to_string());
    }

    let origin = origin?;
    [context.namespace_src_root(), context.namespace_gen_root()]
        .into_iter()
        .find(|root| origin.starts_with(root))
        .map(|root| {
            let from_root = context.paths.relative(root, origin);
            context.paths.combine(&from_root, source)
        })
}
