//! `batch` command: resolve an edge list in parallel.
//!
//! Input is one `source<TAB>origin` per line; output is a JSON array in
//! input order:
//!
//! ```json
//! [{ "source": "./util", "origin": "/src/…/page.ts",
//!    "result": { "kind": "resolved_path", "absolute_path": "/src/…/util" } }]
//! ```
//!
//! With `--hook`, `result` holds the bundler hook value instead.

use std::fs;
use std::io::Write;

use anyhow::Result;
use rayon::prelude::*;
use serde_json::{Value as JsonValue, json};

use super::common::{Edge, read_edges};
use crate::cli::BatchArgs;
use crate::log;
use crate::resolver::{Resolution, ResolveContext, resolve};
use crate::utils::path::PathOps;
use crate::utils::plural_count;

/// Execute batch command
pub fn run_batch(args: &BatchArgs, context: &ResolveContext) -> Result<()> {
    let edges = read_edges(args.input.as_deref())?;
    log!("batch"; "resolving {}", plural_count(edges.len(), "edge"));

    let results = resolve_all(&edges, context);
    let summary = Summary::collect(&results);
    log!(
        "batch";
        "{} resolved, {} external, {} unhandled",
        summary.resolved, summary.external, summary.unhandled
    );

    let output = render(&edges, &results, args.hook);
    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("batch"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Resolve every edge; results line up with `edges`.
pub fn resolve_all<P: PathOps>(edges: &[Edge], context: &ResolveContext<P>) -> Vec<Resolution> {
    edges
        .par_iter()
        .map(|edge| resolve(&edge.request(), context))
        .collect()
}

fn render(edges: &[Edge], results: &[Resolution], hook: bool) -> JsonValue {
    let rows = edges
        .iter()
        .zip(results)
        .map(|(edge, result)| {
            let result = if hook {
                result.to_hook_value()
            } else {
                serde_json::to_value(result).unwrap_or_default()
            };
            json!({
                "source": edge.source,
                "origin": edge.origin,
                "result": result,
            })
        })
        .collect();
    JsonValue::Array(rows)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    resolved: usize,
    external: usize,
    unhandled: usize,
}

impl Summary {
    fn collect(results: &[Resolution]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            if r.is_unhandled() {
                acc.unhandled += 1;
            } else if r.is_external() {
                acc.external += 1;
            } else {
                acc.resolved += 1;
            }
            acc
        })
    }
}
