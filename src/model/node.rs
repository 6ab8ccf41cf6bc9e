//! Node identifiers for data graphs, automata, and their product.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Anything usable as a node identifier.
///
/// `Ord` is required: every traversal breaks ties on node order, which is
/// what makes repeated runs produce identical output.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// A node of the product graph: "at data-graph node `g`, in automaton state `h`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductNode<N, S> {
    pub g: N,
    pub h: S,
}

impl<N, S> ProductNode<N, S> {
    pub fn new(g: N, h: S) -> Self {
        Self { g, h }
    }
}

impl<N: fmt::Display, S: fmt::Display> fmt::Display for ProductNode<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.g, self.h)
    }
}

/// A node of the augmented product graph.
///
/// The two sentinels can never collide with a real product node. Variant
/// order puts `SuperSource` first and `SuperTarget` last under `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PNode<N, S> {
    SuperSource,
    Real(ProductNode<N, S>),
    SuperTarget,
}

impl<N, S> PNode<N, S> {
    pub fn real(g: N, h: S) -> Self {
        PNode::Real(ProductNode::new(g, h))
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, PNode::Real(_))
    }

    pub fn as_real(&self) -> Option<&ProductNode<N, S>> {
        match self {
            PNode::Real(p) => Some(p),
            _ => None,
        }
    }
}

impl<N: fmt::Display, S: fmt::Display> fmt::Display for PNode<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PNode::SuperSource => write!(f, "SUPER_SOURCE"),
            PNode::Real(p) => write!(f, "{p}"),
            PNode::SuperTarget => write!(f, "SUPER_TARGET"),
        }
    }
}
