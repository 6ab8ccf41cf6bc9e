//! # reglinker — Regular-Language-Constrained Paths Through Every Edge
//!
//! For every edge of a directed, weighted, edge-labeled graph `G`, find the
//! cheapest path from a source to a target that uses that edge and whose
//! label sequence is accepted by an automaton `H` (itself a labeled graph).
//!
//! ## Pipeline
//!
//! 1. **Product**: label-constrained tensor product `P = G × H`
//! 2. **Augment**: super-source → every (source, start-state) pair,
//!    every (target, accept-state) pair → super-target
//! 3. **QuickLinker**: two shortest-path runs over `P` answer every edge
//! 4. **Rank**: dense ranks over distinct path weights
//! 5. **Project**: map each product path back onto `G` and `H`
//!
//! ## Quick Start
//!
//! ```rust
//! use reglinker::{Graph, RegLinker, Terminals};
//!
//! let mut g: Graph<u32> = Graph::new();
//! g.add_edge(1, 2, ["a"], Some(1.0));
//! g.add_edge(2, 3, ["b"], Some(1.0));
//!
//! // a*
//! let mut h: Graph<u32> = Graph::new();
//! h.add_edge(0, 0, ["a"], None);
//!
//! let results = RegLinker::new(&g, &h, Terminals::new(vec![1], vec![2], vec![0], vec![0])).run();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].rank, 0);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod algo;
pub mod linker;
pub mod config;
pub mod io;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Graph, EdgeAttrs, Labels, Direction, NodeKey,
    ProductNode, PNode,
    LinkedEdge, RankedEdge, LabeledEdge, Projection, RegLinkerResult,
};
pub use algo::{ProductGraph, Terminals};
pub use linker::{RegLinker, reg_linker};
pub use config::{GraphFormat, NodeTypeFormat, RegLinkerConfig};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("Invalid weight at line {line}: {value:?} (expected a non-negative number)")]
    InvalidWeight { line: usize, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
