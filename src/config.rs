//! Run configuration: column layout of the input tables, node-role
//! keywords, and the automaton's start/accept states.
//!
//! Loaded from JSON; every field has a default, unknown fields are rejected.
//!
//! ```json
//! {
//!   "graph": { "label_col": 2, "weight_col": 3 },
//!   "node_types": { "source_keywords": ["source", "receptor"], "target_keywords": ["tf"] },
//!   "automaton_sources": ["0"],
//!   "automaton_targets": ["2"]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Column layout of a tab-separated edge list. Columns are 0-indexed;
/// columns 0 and 1 are always tail and head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphFormat {
    pub label_col: Option<usize>,
    pub weight_col: Option<usize>,
    pub comment_prefix: String,
}

impl Default for GraphFormat {
    fn default() -> Self {
        Self {
            label_col: Some(2),
            weight_col: Some(3),
            comment_prefix: "#".into(),
        }
    }
}

impl GraphFormat {
    /// Labeled, unweighted edge list used for automata.
    pub fn automaton() -> Self {
        Self { weight_col: None, ..Self::default() }
    }

    fn validate(&self, what: &str) -> Result<()> {
        for col in [self.label_col, self.weight_col].into_iter().flatten() {
            if col < 2 {
                return Err(Error::Config(format!(
                    "{what}: column {col} is reserved for tail/head"
                )));
            }
        }
        if self.label_col.is_some() && self.label_col == self.weight_col {
            return Err(Error::Config(format!("{what}: label and weight share a column")));
        }
        Ok(())
    }
}

/// Layout of the node-role table: one node per line, its role keyword in
/// `type_col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeTypeFormat {
    pub type_col: usize,
    pub source_keywords: Vec<String>,
    pub target_keywords: Vec<String>,
    pub comment_prefix: String,
}

impl Default for NodeTypeFormat {
    fn default() -> Self {
        Self {
            type_col: 1,
            source_keywords: vec!["source".into()],
            target_keywords: vec!["target".into()],
            comment_prefix: "#".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegLinkerConfig {
    pub graph: GraphFormat,
    #[serde(default = "GraphFormat::automaton")]
    pub automaton: GraphFormat,
    pub node_types: NodeTypeFormat,
    /// Automaton start states.
    pub automaton_sources: Vec<String>,
    /// Automaton accepting states.
    pub automaton_targets: Vec<String>,
    pub weighted: bool,
}

impl Default for RegLinkerConfig {
    fn default() -> Self {
        Self {
            graph: GraphFormat::default(),
            automaton: GraphFormat::automaton(),
            node_types: NodeTypeFormat::default(),
            automaton_sources: Vec::new(),
            automaton_targets: Vec::new(),
            weighted: true,
        }
    }
}

impl RegLinkerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.graph.validate("graph")?;
        self.automaton.validate("automaton")?;
        if self.node_types.type_col == 0 {
            return Err(Error::Config("node_types: column 0 holds the node".into()));
        }
        if self.weighted && self.graph.weight_col.is_none() {
            tracing::warn!("weighted run without a weight column; every edge costs 1");
        }
        Ok(())
    }
}
