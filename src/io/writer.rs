//! Result export: edge-rank, projected edge-rank, and path tables.
//!
//! ```text
//! edges:      tail  head  rank  weight            (product nodes)
//! projected:  tail  head  rank  weight            (data-graph nodes)
//! paths:      rank  weight  p1|p2|..  g1|g2|..  h1|h2|..  (g1, g2, [l]), ..
//! ```
//!
//! Records are separated by a single newline; nothing precedes the first
//! record or follows the last. Weights always carry a fractional part
//! (`3.0`, not `3`).

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::model::RegLinkerResult;
use crate::Result;

fn write_records<T>(
    writer: &mut dyn Write,
    results: &[T],
    mut record: impl FnMut(&mut dyn Write, &T) -> std::io::Result<()>,
) -> Result<()> {
    for (i, result) in results.iter().enumerate() {
        if i != 0 {
            writeln!(writer)?;
        }
        record(&mut *writer, result)?;
    }
    Ok(())
}

/// One line per result: product-edge tail, head, rank, weight.
pub fn write_edge_file<N: Display, S: Display>(
    writer: &mut dyn Write,
    results: &[RegLinkerResult<N, S>],
) -> Result<()> {
    write_records(writer, results, |w, r| {
        write!(w, "{}\t{}\t{}\t{:?}", r.edge.tail, r.edge.head, r.rank, r.weight())
    })
}

/// Like [`write_edge_file`] but with the data-graph component of each
/// endpoint only.
pub fn write_projected_edge_file<N: Display, S: Display>(
    writer: &mut dyn Write,
    results: &[RegLinkerResult<N, S>],
) -> Result<()> {
    write_records(writer, results, |w, r| {
        write!(w, "{}\t{}\t{}\t{:?}", r.edge.tail.g, r.edge.head.g, r.rank, r.weight())
    })
}

/// One line per result: rank, weight, product path, G path, H path, and
/// the labeled G edges.
pub fn write_paths_file<N: Display, S: Display>(
    writer: &mut dyn Write,
    results: &[RegLinkerResult<N, S>],
) -> Result<()> {
    write_records(writer, results, |w, r| {
        let p = &r.projection;
        write!(
            w,
            "{}\t{}\t{:?}\t{}\t{}\t{}",
            r.rank,
            r.weight(),
            join(r.path(), "|"),
            join(&p.g_path, "|"),
            join(&p.h_path, "|"),
            join(&p.labeled_path, ", "),
        )
    })
}

/// All results as a pretty-printed JSON array.
pub fn write_json<N: Serialize, S: Serialize>(
    writer: &mut dyn Write,
    results: &[RegLinkerResult<N, S>],
) -> Result<()> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

fn join<T: Display>(items: &[T], sep: &str) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(sep)
}
