//! Directed, edge-labeled, optionally weighted graph.
//!
//! At most one edge record exists per ordered node pair. Declaring an edge
//! again merges its labels into the existing record; a declaration that
//! carries a weight overwrites the stored one (last write wins).

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use super::{Direction, EdgeAttrs, NodeKey};

type Adjacency<N> = HashMap<N, SmallVec<[N; 4]>>;

/// A directed graph over node identifiers `N`.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeKey> {
    nodes: HashSet<N>,
    edges: HashMap<(N, N), EdgeAttrs>,
    outgoing: Adjacency<N>,
    incoming: Adjacency<N>,
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> Graph<N> {
    pub fn new() -> Self {
        Self {
            nodes: HashSet::new(),
            edges: HashMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, node: N) {
        self.nodes.insert(node);
    }

    /// Add or merge the edge `tail -> head`.
    ///
    /// `weight`, when given, must be finite and non-negative; shortest-path
    /// runs assume it. File ingestion rejects anything else with
    /// [`Error::InvalidWeight`](crate::Error::InvalidWeight).
    pub fn add_edge(
        &mut self,
        tail: N,
        head: N,
        labels: impl IntoIterator<Item = impl Into<String>>,
        weight: Option<f64>,
    ) {
        debug_assert!(
            weight.is_none_or(|w| w.is_finite() && w >= 0.0),
            "edge weight must be finite and non-negative, got {weight:?}"
        );
        let key = (tail, head);
        if let Some(attrs) = self.edges.get_mut(&key) {
            attrs.merge_labels(labels);
            if weight.is_some() {
                attrs.weight = weight;
            }
            return;
        }

        let (tail, head) = key;
        self.nodes.insert(tail.clone());
        self.nodes.insert(head.clone());
        self.outgoing.entry(tail.clone()).or_default().push(head.clone());
        self.incoming.entry(head.clone()).or_default().push(tail.clone());
        self.edges.insert((tail, head), EdgeAttrs::new(labels, weight));
    }

    /// Remove `tail -> head`, returning its attributes. Endpoints stay.
    pub fn remove_edge(&mut self, tail: &N, head: &N) -> Option<EdgeAttrs> {
        let attrs = self.edges.remove(&(tail.clone(), head.clone()))?;
        if let Some(succ) = self.outgoing.get_mut(tail) {
            succ.retain(|n| n != head);
        }
        if let Some(pred) = self.incoming.get_mut(head) {
            pred.retain(|n| n != tail);
        }
        Some(attrs)
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    pub fn contains_edge(&self, tail: &N, head: &N) -> bool {
        self.edge(tail, head).is_some()
    }

    pub fn edge(&self, tail: &N, head: &N) -> Option<&EdgeAttrs> {
        self.edges.get(&(tail.clone(), head.clone()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// All edges with attributes, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &EdgeAttrs)> {
        self.edges.iter().map(|((t, h), a)| (t, h, a))
    }

    /// Neighbours of `node` in the given direction, sorted.
    pub fn neighbors(&self, node: &N, dir: Direction) -> Vec<&N> {
        let adj = match dir {
            Direction::Outgoing => &self.outgoing,
            Direction::Incoming => &self.incoming,
        };
        let mut out: Vec<&N> = adj.get(node).map(|v| v.iter().collect()).unwrap_or_default();
        out.sort();
        out
    }

    pub fn successors(&self, node: &N) -> Vec<&N> {
        self.neighbors(node, Direction::Outgoing)
    }

    pub fn predecessors(&self, node: &N) -> Vec<&N> {
        self.neighbors(node, Direction::Incoming)
    }

    /// Outgoing edges of `node` as `(head, attrs)`, sorted by head.
    pub fn out_edges(&self, node: &N) -> Vec<(&N, &EdgeAttrs)> {
        self.successors(node)
            .into_iter()
            .filter_map(|head| self.edge(node, head).map(|a| (head, a)))
            .collect()
    }

    /// Incoming edges of `node` as `(tail, attrs)`, sorted by tail.
    pub fn in_edges(&self, node: &N) -> Vec<(&N, &EdgeAttrs)> {
        self.predecessors(node)
            .into_iter()
            .filter_map(|tail| self.edge(tail, node).map(|a| (tail, a)))
            .collect()
    }
}
