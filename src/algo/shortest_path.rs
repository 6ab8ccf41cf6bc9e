//! Single-source shortest paths over non-negative weights.
//!
//! Weighted runs use Dijkstra; unweighted runs use breadth-first search
//! with every edge costing 1. Running with [`Direction::Incoming`] walks
//! edges backwards, which answers "cheapest path from every node to
//! `source`" without building a reversed graph.
//!
//! Unreachable nodes are simply absent from the result.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::model::{Direction, EdgeAttrs, Graph, NodeKey};

/// Distances and predecessor links from one source.
///
/// For an `Incoming` run the "predecessor" of a node is the next hop on its
/// way to the source.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    source: N,
    direction: Direction,
    distance: HashMap<N, f64>,
    predecessor: HashMap<N, N>,
}

impl<N: NodeKey> ShortestPaths<N> {
    fn empty(source: N, direction: Direction) -> Self {
        Self {
            source,
            direction,
            distance: HashMap::new(),
            predecessor: HashMap::new(),
        }
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, node: &N) -> bool {
        self.distance.contains_key(node)
    }

    pub fn distance(&self, node: &N) -> Option<f64> {
        self.distance.get(node).copied()
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessor.get(node)
    }

    /// Number of reached nodes, the source included.
    pub fn reached(&self) -> usize {
        self.distance.len()
    }

    /// The chosen path between `source` and `node`, in edge order.
    ///
    /// `Outgoing`: `source .. node`. `Incoming`: `node .. source`.
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        if !self.contains(node) {
            return None;
        }
        let mut chain = vec![node.clone()];
        let mut cursor = node;
        while let Some(prev) = self.predecessor.get(cursor) {
            chain.push(prev.clone());
            cursor = prev;
        }
        if self.direction == Direction::Outgoing {
            chain.reverse();
        }
        Some(chain)
    }
}

/// Total order over non-negative, non-NaN costs for the heap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn adjacent<'g, N: NodeKey>(
    graph: &'g Graph<N>,
    node: &N,
    direction: Direction,
) -> Vec<(&'g N, &'g EdgeAttrs)> {
    match direction {
        Direction::Outgoing => graph.out_edges(node),
        Direction::Incoming => graph.in_edges(node),
    }
}

/// Shortest paths from `source` to every reachable node.
///
/// Ties between equal-cost predecessors go to the smallest node, so the
/// chosen paths are identical from run to run.
pub fn single_source_shortest_paths<N: NodeKey>(
    graph: &Graph<N>,
    source: &N,
    direction: Direction,
    weighted: bool,
) -> ShortestPaths<N> {
    let mut result = ShortestPaths::empty(source.clone(), direction);
    if !graph.contains_node(source) {
        return result;
    }

    if weighted {
        dijkstra(graph, &mut result);
    } else {
        breadth_first(graph, &mut result);
    }

    debug!(
        reached = result.reached(),
        nodes = graph.node_count(),
        ?direction,
        weighted,
        "shortest paths computed"
    );
    result
}

fn dijkstra<N: NodeKey>(graph: &Graph<N>, out: &mut ShortestPaths<N>) {
    let mut settled: HashSet<N> = HashSet::new();
    let mut heap = BinaryHeap::new();

    out.distance.insert(out.source.clone(), 0.0);
    heap.push(Reverse((Cost(0.0), out.source.clone())));

    while let Some(Reverse((Cost(dist), node))) = heap.pop() {
        if !settled.insert(node.clone()) {
            continue;
        }

        for (next, attrs) in adjacent(graph, &node, out.direction) {
            if settled.contains(next) {
                continue;
            }
            let candidate = dist + attrs.cost(true);

            match out.distance.get(next).copied() {
                Some(known) if candidate > known => {}
                Some(known) if candidate == known => {
                    // Equal cost: keep the smaller predecessor.
                    if out.predecessor.get(next).is_some_and(|p| node < *p) {
                        out.predecessor.insert(next.clone(), node.clone());
                    }
                }
                _ => {
                    out.distance.insert(next.clone(), candidate);
                    out.predecessor.insert(next.clone(), node.clone());
                    heap.push(Reverse((Cost(candidate), next.clone())));
                }
            }
        }
    }
}

fn breadth_first<N: NodeKey>(graph: &Graph<N>, out: &mut ShortestPaths<N>) {
    let mut queue = VecDeque::new();

    out.distance.insert(out.source.clone(), 0.0);
    queue.push_back(out.source.clone());

    while let Some(node) = queue.pop_front() {
        let dist = out.distance[&node];
        for next in graph.neighbors(&node, out.direction) {
            if let Some(&known) = out.distance.get(next) {
                // Same layer: keep the smaller predecessor.
                if known == dist + 1.0 && out.predecessor.get(next).is_some_and(|p| node < *p) {
                    out.predecessor.insert(next.clone(), node.clone());
                }
                continue;
            }
            out.distance.insert(next.clone(), dist + 1.0);
            out.predecessor.insert(next.clone(), node.clone());
            queue.push_back(next.clone());
        }
    }
}
