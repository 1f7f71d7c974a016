//! Common utilities shared across CLI commands.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::resolver::ResolveRequest;

/// One import edge read from an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub origin: Option<String>,
}

impl Edge {
    pub fn request(&self) -> ResolveRequest<'_> {
        match &self.origin {
            Some(origin) => ResolveRequest::with_origin(&self.source, origin),
            None => ResolveRequest::new(&self.source),
        }
    }
}

/// Parse one `source<TAB>origin` line. The origin column is optional.
///
/// Blank lines and `#` comments yield `None`.
pub fn parse_edge(line: &str) -> Option<Edge> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return None;
    }

    let (source, origin) = match line.split_once('\t') {
        Some((source, origin)) => (source.trim(), Some(origin.trim())),
        None => (line.trim(), None),
    };

    Some(Edge {
        source: source.to_string(),
        origin: origin.filter(|o| !o.is_empty()).map(str::to_string),
    })
}

/// Parse every edge from a reader.
pub fn parse_edges(reader: impl BufRead) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for line in reader.lines() {
        if let Some(edge) = parse_edge(&line?) {
            edges.push(edge);
        }
    }
    Ok(edges)
}

/// Read edges from `input`, or stdin when it is `None` or `-`.
pub fn read_edges(input: Option<&Path>) -> Result<Vec<Edge>> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open edge list `{}`", path.display()))?;
            parse_edges(BufReader::new(file))
        }
        _ => parse_edges(io::stdin().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_with_origin() {
        let edge = parse_edge("./util\t/src/brave/ui/webui/resources/a.ts\r\n").unwrap();
        assert_eq!(edge.source, "./util");
        assert_eq!(
            edge.origin.as_deref(),
            Some("/src/brave/ui/webui/resources/a.ts")
        );
        assert_eq!(edge.request().origin, Some("/src/brave/ui/webui/resources/a.ts"));
    }

    #[test]
    fn test_parse_edge_without_origin() {
        let edge = parse_edge("chrome://brave-resources/a.js").unwrap();
        assert_eq!(edge.origin, None);

        let edge = parse_edge("chrome://brave-resources/a.js\t").unwrap();
        assert_eq!(edge.origin, None);
    }

    #[test]
    fn test_parse_edge_skips_blank_and_comments() {
        assert_eq!(parse_edge(""), None);
        assert_eq!(parse_edge("   "), None);
        assert_eq!(parse_edge("# header"), None);
    }

    #[test]
    fn test_parse_edges() {
        let input = "a.js\n\n# comment\n./b\t/src/x.ts\n";
        let edges = parse_edges(input.as_bytes()).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1].source, "./b");
    }

    #[test]
    fn test_read_edges_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.tsv");
        std::fs::write(&path, "//brave-resources/a.js\n").unwrap();

        let edges = read_edges(Some(&path)).unwrap();
        assert_eq!(edges.len(), 1);
        assert!(read_edges(Some(&dir.path().join("missing.tsv"))).is_err());
    }
}
