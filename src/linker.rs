//! The RegLinker pipeline: product construction, QuickLinker, ranking,
//! and projection, in one deterministic pass with no I/O.

use tracing::info;

use crate::algo::{ProductGraph, Terminals, build_product_graph, project, quick_linker, rank_results};
use crate::model::{Graph, NodeKey, RegLinkerResult};

/// One RegLinker run over a data graph `g` and an automaton `h`.
///
/// ```rust
/// use reglinker::{Graph, RegLinker, Terminals};
///
/// let mut g: Graph<&str> = Graph::new();
/// g.add_edge("EGFR", "GRB2", ["binding"], Some(1.0));
/// g.add_edge("GRB2", "SOS1", ["binding"], Some(2.0));
///
/// // binding*
/// let mut h: Graph<u32> = Graph::new();
/// h.add_edge(0, 0, ["binding"], None);
///
/// let terminals = Terminals::new(vec!["EGFR"], vec!["SOS1"], vec![0], vec![0]);
/// let results = RegLinker::new(&g, &h, terminals).run();
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].projection.g_path, vec!["EGFR", "GRB2", "SOS1"]);
/// assert_eq!(results[0].weight(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct RegLinker<'a, N: NodeKey, S: NodeKey> {
    g: &'a Graph<N>,
    h: &'a Graph<S>,
    terminals: Terminals<N, S>,
    weighted: bool,
}

impl<'a, N: NodeKey, S: NodeKey> RegLinker<'a, N, S> {
    /// Weighted by default.
    pub fn new(g: &'a Graph<N>, h: &'a Graph<S>, terminals: Terminals<N, S>) -> Self {
        Self { g, h, terminals, weighted: true }
    }

    /// Unweighted runs score every path by its hop count.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn terminals(&self) -> &Terminals<N, S> {
        &self.terminals
    }

    /// The augmented product graph this run searches.
    pub fn product_graph(&self) -> ProductGraph<N, S> {
        build_product_graph(self.g, self.h, &self.terminals)
    }

    /// Ranked, projected results, cheapest first.
    pub fn run(&self) -> Vec<RegLinkerResult<N, S>> {
        let product = self.product_graph();
        let ranked = rank_results(quick_linker(&product, self.weighted));

        let results: Vec<_> = ranked
            .into_iter()
            .map(|r| {
                let projection = project(self.g, &r.edge.path);
                RegLinkerResult { edge: r.edge, rank: r.rank, projection }
            })
            .collect();

        info!(
            results = results.len(),
            distinct_ranks = results.last().map_or(0, |r| r.rank + 1),
            weighted = self.weighted,
            "reglinker run complete"
        );
        results
    }
}

/// Shorthand for `RegLinker::new(g, h, terminals).weighted(weighted).run()`.
pub fn reg_linker<N: NodeKey, S: NodeKey>(
    g: &Graph<N>,
    h: &Graph<S>,
    terminals: Terminals<N, S>,
    weighted: bool,
) -> Vec<RegLinkerResult<N, S>> {
    RegLinker::new(g, h, terminals).weighted(weighted).run()
}
