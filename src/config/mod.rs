//! Resolver configuration management for `webui-resolve.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── host       # [host]
//! │   ├── tree       # [tree]
//! │   ├── resolve    # [resolve]
//! │   └── trace      # [trace]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ResolverConfig (this file)
//! ```
//!
//! The loaded config is immutable: it is built once at startup and turned
//! into a [`ResolveContext`](crate::resolver::ResolveContext).

pub mod section;
pub mod types;
mod util;

use util::{expand_tilde, find_config_file};

pub use section::{HostConfig, ResolveSectionConfig, TraceConfig, TreeConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    debug, log,
    utils::path::{normalize_path, posix},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing webui-resolve.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths are resolved against (internal use only)
    #[serde(skip)]
    pub base_dir: PathBuf,

    /// Resource URL namespaces
    #[serde(default)]
    pub host: HostConfig,

    /// Source and generated trees
    #[serde(default)]
    pub tree: TreeConfig,

    /// Resolution settings
    #[serde(default)]
    pub resolve: ResolveSectionConfig,

    /// Diagnostic trace settings
    #[serde(default)]
    pub trace: TraceConfig,
}

impl ResolverConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Without one, the
    /// defaults are used as long as `--src` and `--gen` are given.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let path = normalize_path(&path);
                let mut config = Self::from_path(&path)?;
                config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None if cli.src.is_some() && cli.gen_path.is_some() => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    base_dir: cwd.clone(),
                    ..Self::default()
                }
            }
            None => return Err(ConfigError::NotFound(cli.config.clone()).into()),
        };

        config.apply_cli(cli, &cwd);
        config.normalize_paths();
        config.validate()?;

        debug!("config"; "src: {}", config.tree.src_path);
        debug!("config"; "gen: {}", config.tree.gen_path);
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global CLI overrides. CLI paths are `~`-expanded, then taken
    /// relative to `cwd`.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        let cwd_str = cwd.to_string_lossy();

        let overrides = [
            (&cli.src, &mut self.tree.src_path),
            (&cli.gen_path, &mut self.tree.gen_path),
            (&cli.root, &mut self.tree.root_path),
        ];
        for (cli_path, tree_path) in overrides {
            if let Some(path) = cli_path {
                let path = expand_tilde(path);
                *tree_path = if path.starts_with('/') {
                    path
                } else {
                    posix::join(&cwd_str, &path)
                };
            }
        }

        self.resolve.excludes.extend(cli.exclude.iter().cloned());

        if let Some(file) = &cli.trace {
            self.trace.enable = true;
            self.trace.file = Some(cwd.join(file));
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to the base directory.
    fn normalize_paths(&mut self) {
        let base = self.base_dir.clone();
        self.tree.normalize(&base);
        self.trace.normalize(&base);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.host.validate(&mut diag);
        self.tree.validate(&mut diag);
        self.resolve
            .validate(&self.host.canonical_prefix(), &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ResolverConfig {
    let (parsed, ignored) = ResolverConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A normalized config with absolute roots `/src/` and `/gen/`.
#[cfg(test)]
pub fn test_config() -> ResolverConfig {
    let mut config = ResolverConfig {
        base_dir: PathBuf::from("/project"),
        ..ResolverConfig::default()
    };
    config.tree.src_path = "/src/".to_string();
    config.tree.gen_path = "/gen/".to_string();
    config.normalize_paths();
    config
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_invalid_toml() {
        assert!(ResolverConfig::parse_with_ignored("[tree\nsrc = \"/s\"").is_err());
    }

    #[test]
    fn test_parse_sections() {
        let config = test_parse_config(
            "[tree]\nsrc = \"/s/\"\ngen = \"/g/\"\n[resolve]\nexcludes = [\"chrome://resources/a.js\"]",
        );
        assert_eq!(config.tree.src_path, "/s/");
        assert_eq!(config.tree.gen_path, "/g/");
        assert_eq!(config.resolve.excludes, vec!["chrome://resources/a.js"]);
    }

    #[test]
    fn test_config_default() {
        let config = ResolverConfig::default();
        assert!(config.config_path.is_none());
        assert_eq!(config.host.scheme, "chrome");
        assert!(config.resolve.excludes.is_empty());
        assert!(!config.trace.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[tree]\nsrc = \"/s/\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = ResolverConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.tree.src_path, "/s/");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_test_config_is_valid() {
        let config = test_config();
        assert_eq!(config.tree.root_path, "/project/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_roots() {
        let mut config = ResolverConfig {
            base_dir: PathBuf::from("/project"),
            ..ResolverConfig::default()
        };
        config.normalize_paths();

        let err = config.validate().unwrap_err();
        let err = err.downcast::<ConfigError>().unwrap();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_load_from_file_with_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webui-resolve.toml");
        fs::write(
            &path,
            "[tree]\nsrc = \"src\"\ngen = \"out/gen\"\n[resolve]\nexcludes = [\"chrome://resources/a.js\"]",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "webui-resolve",
            "-C",
            path.to_str().unwrap(),
            "--gen",
            "/abs/gen",
            "--exclude",
            "chrome://resources/b.js",
            "check",
        ]);
        let config = ResolverConfig::load(&cli).unwrap();

        let base = normalize_path(dir.path());
        assert_eq!(config.tree.src_path, format!("{}/src/", base.display()));
        assert_eq!(config.tree.gen_path, "/abs/gen/");
        assert_eq!(config.resolve.excludes.len(), 2);
        assert_eq!(config.config_path, Some(normalize_path(&path)));
    }

    #[test]
    fn test_cli_roots_expand_tilde() {
        let cli = Cli::parse_from([
            "webui-resolve",
            "--src",
            "~/chromium/src",
            "--gen",
            "out/gen",
            "check",
        ]);
        let mut config = ResolverConfig::default();
        config.apply_cli(&cli, Path::new("/cwd"));

        let expanded = expand_tilde("~/chromium/src");
        assert!(!expanded.starts_with('~'), "HOME is not set");
        assert_eq!(config.tree.src_path, expanded);
        assert_eq!(config.tree.gen_path, "/cwd/out/gen");
    }

    #[test]
    fn test_load_missing_config_without_roots() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let cli = Cli::parse_from(["webui-resolve", "-C", missing.to_str().unwrap(), "check"]);

        let err = ResolverConfig::load(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_missing_config_with_roots() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let cli = Cli::parse_from([
            "webui-resolve",
            "-C",
            missing.to_str().unwrap(),
            "--src",
            "/s",
            "--gen",
            "/g",
            "check",
        ]);

        let config = ResolverConfig::load(&cli).unwrap();
        assert!(config.config_path.is_none());
        assert_eq!(config.tree.src_path, "/s/");
        assert_eq!(config.tree.gen_path, "/g/");
    }
}
