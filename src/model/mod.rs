//! # Graph Model
//!
//! Plain data types shared by every stage of the pipeline: the labeled
//! graph container, product-graph nodes, and the result records.
//!
//! Design rule: no algorithms and no I/O here.

pub mod node;
pub mod edge;
pub mod graph;
pub mod path;

pub use node::{NodeKey, ProductNode, PNode};
pub use edge::{Direction, EdgeAttrs, Labels};
pub use graph::Graph;
pub use path::{LabeledEdge, LinkedEdge, Projection, RankedEdge, RegLinkerResult};
