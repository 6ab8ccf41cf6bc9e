//! Dense ranking of linked edges by path weight.

use std::cmp::Ordering;

use crate::model::{LinkedEdge, NodeKey, RankedEdge};

/// Weight ascending, then tail, then head.
pub fn result_order<N: NodeKey, S: NodeKey>(a: &LinkedEdge<N, S>, b: &LinkedEdge<N, S>) -> Ordering {
    a.weight
        .total_cmp(&b.weight)
        .then_with(|| a.tail.cmp(&b.tail))
        .then_with(|| a.head.cmp(&b.head))
}

/// Attach a dense rank to every result: rank 0 is the smallest distinct
/// weight, rank 1 the next, and equal weights share a rank.
pub fn rank_results<N: NodeKey, S: NodeKey>(mut results: Vec<LinkedEdge<N, S>>) -> Vec<RankedEdge<N, S>> {
    let mut distinct: Vec<f64> = results.iter().map(|r| r.weight).collect();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();

    results.sort_by(result_order);
    results
        .into_iter()
        .map(|edge| {
            let rank = distinct.partition_point(|w| *w < edge.weight);
            RankedEdge { edge, rank }
        })
        .collect()
}
