//! Property tests over random small graphs and automata.
//!
//! Weights are small integers so path sums compare exactly.

use hashbrown::HashSet;
use proptest::prelude::*;
use reglinker::algo::{build_product_graph, single_source_shortest_paths, zip_paths};
use reglinker::{Direction, Graph, PNode, Terminals, reg_linker};

type EdgeSpec = (u8, u8, &'static str, u8);

fn data_edges() -> impl Strategy<Value = Vec<EdgeSpec>> {
    prop::collection::vec(
        (0u8..7, 0u8..7, prop::sample::select(vec!["a", "b", "c"]), 0u8..5),
        0..24,
    )
}

fn automaton_edges() -> impl Strategy<Value = Vec<(u8, u8, &'static str)>> {
    prop::collection::vec((0u8..3, 0u8..3, prop::sample::select(vec!["a", "b"])), 1..6)
}

fn terminals() -> impl Strategy<Value = Terminals<u8, u8>> {
    (
        prop::collection::vec(0u8..7, 0..3),
        prop::collection::vec(0u8..7, 0..3),
        prop::collection::vec(0u8..3, 1..2),
        prop::collection::vec(0u8..3, 1..3),
    )
        .prop_map(|(gs, gt, hs, ht)| Terminals::new(gs, gt, hs, ht))
}

fn build_g(edges: &[EdgeSpec]) -> Graph<u8> {
    let mut g = Graph::new();
    for &(u, v, l, w) in edges {
        g.add_edge(u, v, [l], Some(f64::from(w)));
    }
    g
}

fn build_h(edges: &[(u8, u8, &'static str)]) -> Graph<u8> {
    let mut h = Graph::new();
    for &(x, y, l) in edges {
        h.add_edge(x, y, [l], None);
    }
    h
}

/// First declaration per (tail, head) pair, so insertion order cannot
/// change labels or weights.
fn first_per_pair(edges: &[EdgeSpec]) -> Vec<EdgeSpec> {
    let mut seen = HashSet::new();
    edges.iter().copied().filter(|&(u, v, _, _)| seen.insert((u, v))).collect()
}

proptest! {
    #[test]
    fn prop_paths_are_valid_walks_through_their_edge(
        g_edges in data_edges(),
        h_edges in automaton_edges(),
        t in terminals(),
    ) {
        let g = build_g(&g_edges);
        let h = build_h(&h_edges);
        let results = reg_linker(&g, &h, t.clone(), true);

        for r in &results {
            prop_assert!(r.edge.contains_step());

            let first = r.path().first().unwrap();
            let last = r.path().last().unwrap();
            prop_assert!(t.g_sources.contains(&first.g) && t.h_sources.contains(&first.h));
            prop_assert!(t.g_targets.contains(&last.g) && t.h_targets.contains(&last.h));

            // Every step is a G edge and an H edge sharing a label.
            let mut cost = 0.0;
            for w in r.path().windows(2) {
                let ge = g.edge(&w[0].g, &w[1].g).unwrap();
                let he = h.edge(&w[0].h, &w[1].h).unwrap();
                prop_assert!(!ge.shared_labels(he).is_empty());
                cost += ge.weight.unwrap();
            }
            prop_assert_eq!(cost, r.weight());
        }
    }

    #[test]
    fn prop_ranks_are_dense_and_monotonic(
        g_edges in data_edges(),
        h_edges in automaton_edges(),
        t in terminals(),
    ) {
        let results = reg_linker(&build_g(&g_edges), &build_h(&h_edges), t, true);

        if let Some(first) = results.first() {
            prop_assert_eq!(first.rank, 0);
        }
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.weight() <= b.weight());
            if a.weight() == b.weight() {
                prop_assert_eq!(a.rank, b.rank);
                prop_assert!((&a.edge.tail, &a.edge.head) < (&b.edge.tail, &b.edge.head));
            } else {
                prop_assert_eq!(a.rank + 1, b.rank);
            }
        }
    }

    #[test]
    fn prop_weight_is_forward_plus_edge_plus_backward(
        g_edges in data_edges(),
        h_edges in automaton_edges(),
        t in terminals(),
    ) {
        let g = build_g(&g_edges);
        let h = build_h(&h_edges);
        let product = build_product_graph(&g, &h, &t);
        let forward = single_source_shortest_paths(&product, &PNode::SuperSource, Direction::Outgoing, true);
        let backward = single_source_shortest_paths(&product, &PNode::SuperTarget, Direction::Incoming, true);

        let results = reg_linker(&g, &h, t, true);
        let mut linked = 0usize;
        for (u, v, attrs) in product.edges() {
            if u.is_sentinel() || v.is_sentinel() {
                continue;
            }
            let expected = forward.distance(u).zip(backward.distance(v)).map(|(f, b)| f + attrs.cost(true) + b);
            let found = results.iter().find(|r| {
                PNode::Real(r.edge.tail.clone()) == *u && PNode::Real(r.edge.head.clone()) == *v
            });
            prop_assert_eq!(expected, found.map(|r| r.weight()));
            linked += usize::from(found.is_some());
        }
        prop_assert_eq!(linked, results.len());
    }

    #[test]
    fn prop_projection_round_trips(
        g_edges in data_edges(),
        h_edges in automaton_edges(),
        t in terminals(),
    ) {
        let g = build_g(&g_edges);
        let results = reg_linker(&g, &build_h(&h_edges), t, true);
        for r in &results {
            let p = &r.projection;
            prop_assert_eq!(zip_paths(&p.g_path, &p.h_path), r.path().to_vec());
            prop_assert_eq!(p.labeled_path.len(), p.g_path.len() - 1);
        }
    }

    #[test]
    fn prop_output_ignores_insertion_order(
        g_edges in data_edges(),
        h_edges in automaton_edges(),
        t in terminals(),
    ) {
        let edges = first_per_pair(&g_edges);
        let mut reversed = edges.clone();
        reversed.reverse();

        let h = build_h(&h_edges);
        let forward = reg_linker(&build_g(&edges), &h, t.clone(), true);
        let backward = reg_linker(&build_g(&reversed), &h, t.clone(), true);
        prop_assert_eq!(&forward, &backward);

        let again = reg_linker(&build_g(&edges), &h, t, true);
        prop_assert_eq!(forward, again);
    }
}
