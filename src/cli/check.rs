//! `check` command: validate the configuration and show derived roots.

use anyhow::Result;

use crate::config::ResolverConfig;
use crate::log;
use crate::resolver::ResolveContext;
use crate::utils::plural_count;

/// Print what the resolver will use. Validation already ran during load.
pub fn run_check(config: &ResolverConfig, context: &ResolveContext) -> Result<()> {
    for line in report(config, context) {
        log!("check"; "{}", line);
    }
    log!("check"; "ok");
    Ok(())
}

fn report(config: &ResolverConfig, context: &ResolveContext) -> Vec<String> {
    let prefixes = context.prefixes();
    let mut lines = vec![
        match &config.config_path {
            Some(path) => format!("config: {}", path.display()),
            None => "config: defaults (no config file)".to_string(),
        },
        format!(
            "canonical: {} | {}",
            prefixes.canonical, prefixes.canonical_relative
        ),
        format!(
            "namespace: {} | {}",
            prefixes.namespace, prefixes.namespace_relative
        ),
        format!("src root:  {}", context.namespace_src_root()),
        format!("gen root:  {}", context.namespace_gen_root()),
        format!("project:   {}", config.tree.root_path),
        format!(
            "excludes:  {}",
            plural_count(context.excludes().len(), "excluded path")
        ),
    ];

    if context.is_tracing() {
        lines.push(match &config.trace.file {
            Some(file) => format!("trace:     {}", file.display()),
            None => "trace:     stderr".to_string(),
        });
    }
    lines
}
