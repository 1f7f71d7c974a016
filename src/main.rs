//! webui-resolve - resource path resolution for WebUI module bundling.

mod cli;
mod config;
mod logger;
mod resolver;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ResolverConfig;
use logger::TraceLog;
use resolver::ResolveContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = match ResolverConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            log!("error"; "{:#}", e);
            std::process::exit(1);
        }
    };

    let trace = TraceLog::from_config(&config.trace).with_context(|| {
        format!(
            "Failed to open trace file `{}`",
            config.trace.file.as_deref().unwrap_or(std::path::Path::new("")).display()
        )
    })?;
    let context = ResolveContext::from_config(&config).with_trace(trace);
    debug!("main"; "tracing: {}", context.is_tracing());

    match &cli.command {
        Commands::Resolve {
            source,
            origin,
            hook,
        } => cli::resolve::run_resolve(source, origin.as_deref(), *hook, &context),
        Commands::Batch { args } => cli::batch::run_batch(args, &context),
        Commands::Check => cli::check::run_check(&config, &context),
    }
}
