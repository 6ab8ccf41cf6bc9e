//! Projection of product-graph paths back onto the data graph and the
//! automaton.

use crate::model::{Graph, LabeledEdge, NodeKey, ProductNode, Projection};

/// Split a product path into its data-graph and automaton components.
pub fn project_path<N: Clone, S: Clone>(path: &[ProductNode<N, S>]) -> (Vec<N>, Vec<S>) {
    path.iter().map(|p| (p.g.clone(), p.h.clone())).unzip()
}

/// Re-zip two component paths into a product path.
pub fn zip_paths<N: Clone, S: Clone>(g_path: &[N], h_path: &[S]) -> Vec<ProductNode<N, S>> {
    g_path
        .iter()
        .zip(h_path)
        .map(|(g, h)| ProductNode::new(g.clone(), h.clone()))
        .collect()
}

/// Consecutive pairs of `g_path` with their labels in `g`.
///
/// A pair with no edge in `g` gets an empty label list; product paths never
/// produce one.
pub fn labeled_edges<N: NodeKey>(g: &Graph<N>, g_path: &[N]) -> Vec<LabeledEdge<N>> {
    g_path
        .windows(2)
        .map(|w| LabeledEdge {
            tail: w[0].clone(),
            head: w[1].clone(),
            labels: g.edge(&w[0], &w[1]).map(|a| a.labels.clone()).unwrap_or_default(),
        })
        .collect()
}

/// Full projection of one product path.
pub fn project<N: NodeKey, S: Clone>(g: &Graph<N>, path: &[ProductNode<N, S>]) -> Projection<N, S> {
    let (g_path, h_path) = project_path(path);
    let labeled_path = labeled_edges(g, &g_path);
    Projection { g_path, h_path, labeled_path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_project_and_rezip() {
        let path = vec![
            ProductNode::new("EGFR", 0u32),
            ProductNode::new("GRB2", 1),
            ProductNode::new("SOS1", 1),
        ];
        let (g_path, h_path) = project_path(&path);
        assert_eq!(g_path, vec!["EGFR", "GRB2", "SOS1"]);
        assert_eq!(h_path, vec![0, 1, 1]);
        assert_eq!(zip_paths(&g_path, &h_path), path);
    }

    #[test]
    fn test_labeled_edges_use_data_graph_labels() {
        let mut g: Graph<&str> = Graph::new();
        g.add_edge("EGFR", "GRB2", ["binding", "phosphorylation"], Some(1.0));
        g.add_edge("GRB2", "SOS1", ["binding"], Some(1.0));

        let path = vec![ProductNode::new("EGFR", 0u32), ProductNode::new("GRB2", 0), ProductNode::new("SOS1", 0)];
        let projection = project(&g, &path);

        assert_eq!(projection.labeled_path.len(), 2);
        assert_eq!(projection.labeled_path[0].labels.as_slice(), ["binding", "phosphorylation"]);
        assert_eq!(projection.labeled_path[1].to_string(), "(GRB2, SOS1, [binding])");
    }

    #[test]
    fn test_single_node_path_has_no_edges() {
        let g: Graph<&str> = Graph::new();
        let projection = project(&g, &[ProductNode::new("a", 0u32)]);
        assert_eq!(projection.g_path, vec!["a"]);
        assert!(projection.labeled_path.is_empty());
    }
}
