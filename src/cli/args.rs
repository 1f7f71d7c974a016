//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve WebUI resource imports into source and generated trees
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: webui-resolve.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "webui-resolve.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Source tree root (overrides `tree.src`)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub src: Option<String>,

    /// Generated tree root (overrides `tree.gen`)
    #[arg(long = "gen", global = true, value_hint = clap::ValueHint::DirPath)]
    pub gen_path: Option<String>,

    /// Project root (overrides `tree.root`)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<String>,

    /// Additional excluded full path (repeatable)
    #[arg(short = 'x', long, global = true, value_name = "URL")]
    pub exclude: Vec<String>,

    /// Append a trace record for every resolution to this file
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub trace: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a single import
    #[command(visible_alias = "r")]
    Resolve {
        /// Import specifier as written in the module
        source: String,

        /// Absolute path of the importing file
        #[arg(short, long)]
        origin: Option<String>,

        /// Print the bundler hook value as JSON
        #[arg(long)]
        hook: bool,
    },

    /// Resolve a list of imports in parallel
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },

    /// Validate the configuration and print the derived roots
    #[command(visible_alias = "c")]
    Check,
}

/// Batch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// Edge list, one `source<TAB>origin` per line. Use `-` or omit for stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Emit bundler hook values instead of tagged results
    #[arg(long)]
    pub hook: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
