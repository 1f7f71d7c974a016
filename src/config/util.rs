//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check that `url_str` parses as an absolute URL.
///
/// Custom schemes such as `chrome://resources/` are accepted.
pub fn is_valid_url(url_str: &str) -> bool {
    url::Url::parse(url_str).is_ok()
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/src/brave/components/  ← cwd
/// /home/user/src/brave/webui-resolve.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("chrome://resources/"));
        assert!(is_valid_url("brave://wallet"));
        assert!(is_valid_url("https://example.com/path"));
        assert!(!is_valid_url("//resources/"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/abs/path"), "/abs/path");
        assert_eq!(expand_tilde("rel/path"), "rel/path");
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        let config = dir.path().join("a/webui-resolve.toml");
        std::fs::write(&config, "").unwrap();

        let found = find_config_file_from(&nested, Path::new("webui-resolve.toml"));
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_config_file_absolute_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(find_config_file_from(dir.path(), &missing), None);
    }
}
