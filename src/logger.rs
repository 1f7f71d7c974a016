//! Logging utilities with colored output and resolution tracing.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only shown with `--verbose`
//! - `TraceLog`, the write-only diagnostic sink that records every resolution
//!
//! Terminal logs go to stderr so that `batch` and `resolve --hook` can keep
//! stdout for machine-readable output.
//!
//! # Example
//!
//! ```ignore
//! log!("batch"; "resolving {} edges", count);
//! debug!("config"; "src root: {}", root);
//! ```

use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write, stderr},
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::config::TraceConfig;

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "resolve" => prefix.bright_blue().bold().to_string(),
        "batch" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Trace Log (diagnostic sink)
// ============================================================================

/// Write-only sink receiving one record per resolution call.
///
/// Writes are best-effort: any I/O error is dropped so tracing can never
/// change what the resolver returns. The mutex keeps records from parallel
/// callers whole.
#[derive(Default)]
pub struct TraceLog {
    sink: Option<Mutex<Box<dyn Write + Send>>>,
}

impl TraceLog {
    /// A sink that discards everything.
    pub const fn disabled() -> Self {
        Self { sink: None }
    }

    /// Trace into an arbitrary writer.
    pub fn to_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Mutex::new(Box::new(writer))),
        }
    }

    /// Trace to stderr.
    pub fn stderr() -> Self {
        Self::to_writer(io::stderr())
    }

    /// Append to `path`, creating the file if needed.
    pub fn append_to(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::to_writer(file))
    }

    /// Build the sink described by `[trace]`.
    pub fn from_config(config: &TraceConfig) -> io::Result<Self> {
        if !config.enable {
            return Ok(Self::disabled());
        }
        match &config.file {
            Some(path) => Self::append_to(path),
            None => Ok(Self::stderr()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Write one record. Errors are ignored.
    pub fn write(&self, record: &TraceRecord<'_>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let mut writer = sink.lock();
        write!(writer, "{record}").ok();
        writer.flush().ok();
    }
}

impl fmt::Debug for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceLog")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// The full input and parameter set of one resolution call.
#[derive(Debug, Clone, Copy)]
pub struct TraceRecord<'a> {
    pub src_path: &'a str,
    pub gen_path: &'a str,
    pub root_path: &'a str,
    pub host_url: &'a str,
    pub source: &'a str,
    pub origin: Option<&'a str>,
}

impl fmt::Display for TraceRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n----------------\nresolve_id:\n\tsrcPath: [{}],\n\tgenPath: [{}],\n\trootPath: [{}],\n\thostUrl: [{}],\n\tsource: [{}],\n\torigin: [{}]\n",
            self.src_path,
            self.gen_path,
            self.root_path,
            self.host_url,
            self.source,
            self.origin.unwrap_or("undefined"),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
