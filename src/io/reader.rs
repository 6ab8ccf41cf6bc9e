//! Tab-separated ingestion of edge lists and node-role tables.
//!
//! A malformed record aborts the whole read; callers never see a partially
//! parsed graph.

use std::io::BufRead;

use hashbrown::HashSet;
use tracing::debug;

use crate::config::{GraphFormat, NodeTypeFormat};
use crate::model::Graph;
use crate::{Error, Result};

/// Nodes classified as sources and targets, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRoles {
    pub sources: Vec<String>,
    pub targets: Vec<String>,
}

/// Non-comment, non-blank lines as `(line_number, fields)`.
fn records<R: BufRead>(reader: R, comment_prefix: &str) -> impl Iterator<Item = Result<(usize, Vec<String>)>> {
    let comment_prefix = comment_prefix.to_string();
    reader.lines().enumerate().filter_map(move |(idx, line)| {
        let line = match line {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };
        if line.trim().is_empty() || (!comment_prefix.is_empty() && line.starts_with(&comment_prefix)) {
            return None;
        }
        let fields: Vec<String> = line.split('\t').map(|f| f.trim().to_string()).collect();
        Some(Ok((idx + 1, fields)))
    })
}

fn field<'a>(fields: &'a [String], col: usize, line: usize, name: &str) -> Result<&'a str> {
    match fields.get(col) {
        Some(f) if !f.is_empty() => Ok(f.as_str()),
        Some(_) => Err(Error::MalformedRecord {
            line,
            message: format!("empty {name} in column {col}"),
        }),
        None => Err(Error::MalformedRecord {
            line,
            message: format!("expected a {name} in column {col}, found {} columns", fields.len()),
        }),
    }
}

fn parse_weight(raw: &str, line: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(Error::InvalidWeight { line, value: raw.to_string() }),
    }
}

/// Read a tab-separated edge list: `tail  head  [label]  [weight]`.
///
/// Repeated `(tail, head)` rows merge into one edge: labels accumulate and
/// the last weight wins.
pub fn read_graph<R: BufRead>(reader: R, format: &GraphFormat) -> Result<Graph<String>> {
    let mut graph = Graph::new();
    let mut rows = 0usize;

    for record in records(reader, &format.comment_prefix) {
        let (line, fields) = record?;
        let tail = field(&fields, 0, line, "tail")?;
        let head = field(&fields, 1, line, "head")?;
        let label = format
            .label_col
            .map(|col| field(&fields, col, line, "label").map(str::to_string))
            .transpose()?;
        let weight = format
            .weight_col
            .map(|col| field(&fields, col, line, "weight").and_then(|raw| parse_weight(raw, line)))
            .transpose()?;

        graph.add_edge(tail.to_string(), head.to_string(), label, weight);
        rows += 1;
    }

    debug!(rows, nodes = graph.node_count(), edges = graph.edge_count(), "graph read");
    Ok(graph)
}

/// Read a node-role table and classify nodes by keyword.
///
/// A keyword present in both keyword lists puts its node in both roles.
pub fn read_node_types<R: BufRead>(reader: R, format: &NodeTypeFormat) -> Result<NodeRoles> {
    let mut roles = NodeRoles::default();
    let mut seen_sources = HashSet::new();
    let mut seen_targets = HashSet::new();

    for record in records(reader, &format.comment_prefix) {
        let (line, fields) = record?;
        let node = field(&fields, 0, line, "node")?;
        let kind = field(&fields, format.type_col, line, "node type")?;

        if format.source_keywords.iter().any(|k| k == kind) && seen_sources.insert(node.to_string()) {
            roles.sources.push(node.to_string());
        }
        if format.target_keywords.iter().any(|k| k == kind) && seen_targets.insert(node.to_string()) {
            roles.targets.push(node.to_string());
        }
    }

    debug!(sources = roles.sources.len(), targets = roles.targets.len(), "node types read");
    Ok(roles)
}
