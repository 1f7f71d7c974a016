//! Lexical POSIX path operations.
//!
//! The resolver compares paths with string prefixes, so these helpers never
//! touch the filesystem and never canonicalize. They follow `path.posix`
//! semantics for the cases the resolver relies on:
//!
//! - `join("/src/", "brave/ui/")` -> `"/src/brave/ui/"` (trailing slash kept)
//! - `relative("/a/b/", "/a/b/c/d.js")` -> `"c/d.js"`
//! - `combine("sub/file.js", "./util")` -> `"sub/util"`

/// Path collaborators used by the resolver.
///
/// Implementations must be pure: the same arguments always produce the same
/// result.
pub trait PathOps: Send + Sync {
    /// Relative path that leads from `from` to `to`.
    fn relative(&self, from: &str, to: &str) -> String;

    /// Join two path fragments and normalize the result.
    fn join(&self, base: &str, tail: &str) -> String;

    /// Resolve `relative` against the directory containing `base`.
    fn combine(&self, base: &str, relative: &str) -> String;
}

/// Default string-based POSIX implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posix;

impl PathOps for Posix {
    #[inline]
    fn relative(&self, from: &str, to: &str) -> String {
        relative(from, to)
    }

    #[inline]
    fn join(&self, base: &str, tail: &str) -> String {
        join(base, tail)
    }

    #[inline]
    fn combine(&self, base: &str, relative: &str) -> String {
        combine(base, relative)
    }
}

/// Collapse `.`, `..` and repeated separators.
///
/// Leading `/` and trailing `/` survive. An empty result becomes `"."`.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            _ => parts.push(segment),
        }
    }

    let mut out = parts.join("/");
    if absolute {
        out.insert(0, '/');
    }
    if out.is_empty() {
        out.push('.');
    }
    if trailing && !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Join `base` and `tail` with a single separator, then normalize.
pub fn join(base: &str, tail: &str) -> String {
    let joined = match (base.is_empty(), tail.is_empty()) {
        (true, true) => return ".".to_string(),
        (true, false) => tail.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{tail}"),
    };
    normalize(&joined)
}

/// Directory portion of `path`.
///
/// `"sub/file.js"` -> `"sub"`, `"file.js"` -> `"."`, `"/file.js"` -> `"/"`.
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { "/" } else { "." };
    }
    match trimmed.rfind('/') {
        None => ".",
        Some(0) => "/",
        Some(pos) => &trimmed[..pos],
    }
}

/// Relative path from `from` to `to`, both compared segment by segment.
///
/// Returns an empty string when both name the same location.
pub fn relative(from: &str, to: &str) -> String {
    let from = normalize(from);
    let to = normalize(to);

    let from_parts: Vec<&str> = segments(&from).collect();
    let to_parts: Vec<&str> = segments(&to).collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..", from_parts.len() - common);
    let rest = to_parts.iter().skip(common).copied();
    ups.chain(rest).collect::<Vec<_>>().join("/")
}

/// Resolve `relative` against the directory that contains `base`.
pub fn combine(base: &str, relative: &str) -> String {
    if relative.starts_with('/') {
        return normalize(relative);
    }
    join(dirname(base), relative)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/a/./b/../c"), "/a/c");
        assert_eq!(normalize("a//b/"), "a/b/");
        assert_eq!(normalize("../a"), "../a");
        assert_eq!(normalize("/.."), "/");
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("./"), "./");
    }

    #[test]
    fn test_join_keeps_trailing_slash() {
        assert_eq!(
            join("/src/", "brave/ui/webui/resources/"),
            "/src/brave/ui/webui/resources/"
        );
        assert_eq!(join("/gen", "a/b.js"), "/gen/a/b.js");
        assert_eq!(join("/gen/x/", "../y.js"), "/gen/y.js");
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a", ""), "a");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("sub/file.js"), "sub");
        assert_eq!(dirname("file.js"), ".");
        assert_eq!(dirname("/file.js"), "/");
        assert_eq!(dirname("/a/b/"), "/a");
        assert_eq!(dirname("/"), "/");
    }

    #[test]
    fn test_relative() {
        assert_eq!(relative("/a/b/", "/a/b/c/d.js"), "c/d.js");
        assert_eq!(relative("/a/b", "/a/x/y"), "../x/y");
        assert_eq!(relative("/a/b", "/a/b"), "");
        assert_eq!(relative("/a/b/c", "/a"), "../..");
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine("sub/file.ts", "./util"), "sub/util");
        assert_eq!(combine("file.ts", "./util.js"), "util.js");
        assert_eq!(combine("a/b/file.ts", "../c.js"), "a/c.js");
        assert_eq!(combine("a/file.ts", "/abs/x.js"), "/abs/x.js");
    }

    #[test]
    fn test_posix_delegates() {
        let ops = Posix;
        assert_eq!(ops.join("/r/", "x"), join("/r/", "x"));
        assert_eq!(ops.relative("/r/", "/r/x"), "x");
        assert_eq!(ops.combine("x/y.js", "z"), "x/z");
    }
}
