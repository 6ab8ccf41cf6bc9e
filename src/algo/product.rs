//! Label-constrained tensor product and super-node augmentation.
//!
//! ```text
//!   G edge (u, v, {a, b}, w)     H edge (x, y, {b})
//!          └──────────── shared label b ───┘
//!                 P edge ((u,x), (v,y), {b}, w)
//! ```
//!
//! Only label-matching pairs are generated: H edges are indexed by label
//! and each G edge visits only the H edges that share one of its labels.
//! The resulting edge set is exactly the tensor product with mismatched
//! pairs removed.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Graph, Labels, NodeKey, PNode};

/// The (possibly augmented) product graph.
pub type ProductGraph<N, S> = Graph<PNode<N, S>>;

/// Source and target nodes of the data graph and the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminals<N, S> {
    pub g_sources: Vec<N>,
    pub g_targets: Vec<N>,
    pub h_sources: Vec<S>,
    pub h_targets: Vec<S>,
}

impl<N, S> Default for Terminals<N, S> {
    fn default() -> Self {
        Self {
            g_sources: Vec::new(),
            g_targets: Vec::new(),
            h_sources: Vec::new(),
            h_targets: Vec::new(),
        }
    }
}

impl<N, S> Terminals<N, S> {
    pub fn new(g_sources: Vec<N>, g_targets: Vec<N>, h_sources: Vec<S>, h_targets: Vec<S>) -> Self {
        Self { g_sources, g_targets, h_sources, h_targets }
    }
}

/// Build the product of `g` and `h`, keeping only edges whose G and H
/// label sets intersect. Each product edge carries the shared labels and
/// the G edge's weight.
pub fn label_constrained_tensor_product<N: NodeKey, S: NodeKey>(
    g: &Graph<N>,
    h: &Graph<S>,
) -> ProductGraph<N, S> {
    let mut by_label: HashMap<&str, Vec<(&S, &S)>> = HashMap::new();
    for (x, y, attrs) in h.edges() {
        for label in &attrs.labels {
            by_label.entry(label.as_str()).or_default().push((x, y));
        }
    }

    let mut product = Graph::new();
    for (u, v, g_attrs) in g.edges() {
        let mut matched: HashSet<(&S, &S)> = HashSet::new();
        for label in &g_attrs.labels {
            let Some(candidates) = by_label.get(label.as_str()) else {
                continue;
            };
            for &(x, y) in candidates {
                if !matched.insert((x, y)) {
                    continue;
                }
                let shared = h
                    .edge(x, y)
                    .map(|h_attrs| g_attrs.shared_labels(h_attrs))
                    .unwrap_or_default();
                product.add_edge(
                    PNode::real(u.clone(), x.clone()),
                    PNode::real(v.clone(), y.clone()),
                    shared,
                    g_attrs.weight,
                );
            }
        }
    }

    debug!(
        g_edges = g.edge_count(),
        h_edges = h.edge_count(),
        p_nodes = product.node_count(),
        p_edges = product.edge_count(),
        "label-constrained product built"
    );
    product
}

/// Connect the super-source to every `(g_source, h_source)` pair and every
/// `(g_target, h_target)` pair to the super-target. Super edges cost 0.
pub fn add_super_nodes<N: NodeKey, S: NodeKey>(
    product: &mut ProductGraph<N, S>,
    terminals: &Terminals<N, S>,
) {
    product.add_node(PNode::SuperSource);
    product.add_node(PNode::SuperTarget);

    for s in &terminals.g_sources {
        for t in &terminals.h_sources {
            product.add_edge(PNode::SuperSource, PNode::real(s.clone(), t.clone()), Labels::new(), Some(0.0));
        }
    }
    for s in &terminals.g_targets {
        for t in &terminals.h_targets {
            product.add_edge(PNode::real(s.clone(), t.clone()), PNode::SuperTarget, Labels::new(), Some(0.0));
        }
    }
}

/// Product of `g` and `h` with super-source and super-target attached.
pub fn build_product_graph<N: NodeKey, S: NodeKey>(
    g: &Graph<N>,
    h: &Graph<S>,
    terminals: &Terminals<N, S>,
) -> ProductGraph<N, S> {
    let mut product = label_constrained_tensor_product(g, h);
    add_super_nodes(&mut product, terminals);
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(g: u32, h: u32) -> PNode<u32, u32> {
        PNode::real(g, h)
    }

    #[test]
    fn test_only_matching_labels_survive() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], Some(4.0));
        g.add_edge(2, 3, ["b"], Some(1.0));

        let mut h: Graph<u32> = Graph::new();
        h.add_edge(0, 1, ["a"], None);
        h.add_edge(1, 1, ["c"], None);

        let prod = label_constrained_tensor_product(&g, &h);
        assert_eq!(prod.edge_count(), 1);
        let attrs = prod.edge(&p(1, 0), &p(2, 1)).unwrap();
        assert_eq!(attrs.weight, Some(4.0));
        assert_eq!(attrs.labels.as_slice(), ["a"]);
        assert!(!prod.contains_node(&p(2, 0)));
    }

    #[test]
    fn test_multi_label_edges_produce_one_product_edge() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a", "b"], Some(2.0));

        let mut h: Graph<u32> = Graph::new();
        h.add_edge(0, 0, ["b", "a"], None);

        let prod = label_constrained_tensor_product(&g, &h);
        assert_eq!(prod.edge_count(), 1);
        assert_eq!(prod.edge(&p(1, 0), &p(2, 0)).unwrap().labels.as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_empty_inputs_give_empty_product() {
        let g: Graph<u32> = Graph::new();
        let mut h: Graph<u32> = Graph::new();
        h.add_edge(0, 1, ["d"], None);
        assert_eq!(label_constrained_tensor_product(&g, &h).edge_count(), 0);
        assert_eq!(label_constrained_tensor_product(&h, &g).edge_count(), 0);
    }

    #[test]
    fn test_super_nodes_cover_all_pairs() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], None);
        let mut h: Graph<u32> = Graph::new();
        h.add_edge(0, 0, ["a"], None);

        let terminals = Terminals::new(vec![1, 7], vec![2], vec![0], vec![0, 5]);
        let prod = build_product_graph(&g, &h, &terminals);

        assert_eq!(prod.successors(&PNode::SuperSource), vec![&p(1, 0), &p(7, 0)]);
        assert_eq!(prod.predecessors(&PNode::SuperTarget), vec![&p(2, 0), &p(2, 5)]);
        assert_eq!(prod.edge(&PNode::SuperSource, &p(1, 0)).unwrap().weight, Some(0.0));
    }

    #[test]
    fn test_empty_terminals_add_no_super_edges() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], None);
        let mut h: Graph<u32> = Graph::new();
        h.add_edge(0, 0, ["a"], None);

        let prod = build_product_graph(&g, &h, &Terminals::default());
        assert!(prod.successors(&PNode::SuperSource).is_empty());
        assert!(prod.predecessors(&PNode::SuperTarget).is_empty());
        assert_eq!(prod.edge_count(), 1);
    }
}
