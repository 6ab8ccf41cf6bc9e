//! QuickLinker: the cheapest super-source to super-target path through
//! every edge, from exactly two shortest-path runs.
//!
//! 1. forward  = shortest paths from the super-source
//! 2. backward = shortest paths from every node to the super-target
//! 3. for each real edge (u, v): forward(ss -> u) ++ backward(v -> st),
//!    with both sentinels clipped
//!
//! Edges whose tail is unreachable from the super-source, or whose head
//! cannot reach the super-target, lie on no valid path and are dropped.

use tracing::{debug, trace};

use crate::algo::product::ProductGraph;
use crate::algo::rank::result_order;
use crate::algo::shortest_path::{ShortestPaths, single_source_shortest_paths};
use crate::model::{Direction, LinkedEdge, NodeKey, PNode, ProductNode};

/// Run QuickLinker over an augmented product graph.
///
/// Results come back ordered by weight, then tail, then head.
pub fn quick_linker<N: NodeKey, S: NodeKey>(
    product: &ProductGraph<N, S>,
    weighted: bool,
) -> Vec<LinkedEdge<N, S>> {
    let forward = single_source_shortest_paths(product, &PNode::SuperSource, Direction::Outgoing, weighted);
    let backward = single_source_shortest_paths(product, &PNode::SuperTarget, Direction::Incoming, weighted);

    let mut results = Vec::new();
    let mut dropped = 0usize;

    for (u, v, _) in product.edges() {
        if *u == PNode::SuperSource || *v == PNode::SuperTarget {
            continue;
        }
        match link_edge(product, &forward, &backward, u, v, weighted) {
            Some(linked) => results.push(linked),
            None => {
                trace!(tail = ?u, head = ?v, "edge lies on no source-target path");
                dropped += 1;
            }
        }
    }

    results.sort_by(result_order);
    debug!(linked = results.len(), dropped, "quick linker finished");
    results
}

fn link_edge<N: NodeKey, S: NodeKey>(
    product: &ProductGraph<N, S>,
    forward: &ShortestPaths<PNode<N, S>>,
    backward: &ShortestPaths<PNode<N, S>>,
    u: &PNode<N, S>,
    v: &PNode<N, S>,
    weighted: bool,
) -> Option<LinkedEdge<N, S>> {
    let mut full = forward.path_to(u)?;
    full.extend(backward.path_to(v)?);

    // full = [ss, .., u, v, .., st]; the super edges are excluded from cost.
    let inner = &full[1..full.len() - 1];
    let weight = inner
        .windows(2)
        .filter_map(|w| product.edge(&w[0], &w[1]))
        .map(|attrs| attrs.cost(weighted))
        .sum::<f64>();

    let path: Vec<ProductNode<N, S>> = inner.iter().filter_map(PNode::as_real).cloned().collect();

    Some(LinkedEdge {
        tail: u.as_real()?.clone(),
        head: v.as_real()?.clone(),
        path,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::product::{Terminals, build_product_graph};
    use crate::model::Graph;
    use pretty_assertions::assert_eq;

    fn pn(g: u32) -> ProductNode<u32, u32> {
        ProductNode::new(g, 0)
    }

    fn star_automaton(label: &str) -> Graph<u32> {
        let mut h = Graph::new();
        h.add_edge(0, 0, [label], None);
        h
    }

    #[test]
    fn test_every_edge_on_the_chain_gets_the_whole_chain() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], Some(1.0));
        g.add_edge(2, 3, ["a"], Some(2.0));

        let prod = build_product_graph(&g, &star_automaton("a"), &Terminals::new(vec![1], vec![3], vec![0], vec![0]));
        let results = quick_linker(&prod, true);

        assert_eq!(results.len(), 2);
        for r in &results {
            assert_eq!(r.path, vec![pn(1), pn(2), pn(3)]);
            assert_eq!(r.weight, 3.0);
            assert!(r.contains_step());
        }
    }

    #[test]
    fn test_detour_edge_pays_for_the_detour() {
        // 1 -> 2 -> 4 is cheap; 1 -> 3 -> 4 is the only path through (1,3).
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], Some(1.0));
        g.add_edge(2, 4, ["a"], Some(1.0));
        g.add_edge(1, 3, ["a"], Some(5.0));
        g.add_edge(3, 4, ["a"], Some(5.0));

        let prod = build_product_graph(&g, &star_automaton("a"), &Terminals::new(vec![1], vec![4], vec![0], vec![0]));
        let results = quick_linker(&prod, true);

        let weights: Vec<(u32, u32, f64)> = results.iter().map(|r| (r.tail.g, r.head.g, r.weight)).collect();
        assert_eq!(weights, vec![(1, 2, 2.0), (2, 4, 2.0), (1, 3, 10.0), (3, 4, 10.0)]);
    }

    #[test]
    fn test_dead_ends_are_dropped() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], Some(1.0));
        g.add_edge(2, 9, ["a"], Some(1.0)); // 9 never reaches the target
        g.add_edge(8, 2, ["a"], Some(1.0)); // 8 is never reached

        let prod = build_product_graph(&g, &star_automaton("a"), &Terminals::new(vec![1], vec![2], vec![0], vec![0]));
        let results = quick_linker(&prod, true);

        assert_eq!(results.len(), 1);
        assert_eq!((results[0].tail.g, results[0].head.g), (1, 2));
        assert_eq!(results[0].path, vec![pn(1), pn(2)]);
    }

    #[test]
    fn test_unweighted_counts_hops() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], Some(10.0));
        g.add_edge(2, 3, ["a"], Some(10.0));

        let prod = build_product_graph(&g, &star_automaton("a"), &Terminals::new(vec![1], vec![3], vec![0], vec![0]));
        let results = quick_linker(&prod, false);
        assert!(results.iter().all(|r| r.weight == 2.0));
    }

    #[test]
    fn test_no_super_edges_means_no_results() {
        let mut g: Graph<u32> = Graph::new();
        g.add_edge(1, 2, ["a"], Some(1.0));
        let prod = build_product_graph(&g, &star_automaton("a"), &Terminals::default());
        assert!(quick_linker(&prod, true).is_empty());
    }
}
