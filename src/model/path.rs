//! Result records: a product-graph path through one edge, its rank, and
//! its projections back onto the data graph and the automaton.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Labels, ProductNode};

/// The cheapest source-to-target path through one product edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedEdge<N, S> {
    pub tail: ProductNode<N, S>,
    pub head: ProductNode<N, S>,
    /// Product nodes from a source pair to a target pair, sentinels stripped.
    /// Contains `tail, head` as a contiguous step.
    pub path: Vec<ProductNode<N, S>>,
    pub weight: f64,
}

impl<N: PartialEq, S: PartialEq> LinkedEdge<N, S> {
    /// Number of edges along `path`.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether `path` steps directly from `tail` to `head` somewhere.
    pub fn contains_step(&self) -> bool {
        self.path.windows(2).any(|w| w[0] == self.tail && w[1] == self.head)
    }
}

/// A `LinkedEdge` with its dense weight rank (0 = cheapest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEdge<N, S> {
    pub edge: LinkedEdge<N, S>,
    pub rank: usize,
}

/// An edge of the data graph annotated with its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledEdge<N> {
    pub tail: N,
    pub head: N,
    pub labels: Labels,
}

impl<N: fmt::Display> fmt::Display for LabeledEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, [{}])", self.tail, self.head, self.labels.join(", "))
    }
}

/// A product path split into its two component paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection<N, S> {
    pub g_path: Vec<N>,
    pub h_path: Vec<S>,
    /// Consecutive `g_path` pairs with their labels in the data graph.
    pub labeled_path: Vec<LabeledEdge<N>>,
}

/// Final record handed to the export layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegLinkerResult<N, S> {
    pub edge: LinkedEdge<N, S>,
    pub rank: usize,
    pub projection: Projection<N, S>,
}

impl<N, S> RegLinkerResult<N, S> {
    pub fn weight(&self) -> f64 {
        self.edge.weight
    }

    pub fn path(&self) -> &[ProductNode<N, S>] {
        &self.edge.path
    }
}
