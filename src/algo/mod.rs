//! # Algorithms
//!
//! ```text
//! G, H ──▶ product ──▶ quick_linker ──▶ rank ──▶ projection ──▶ results
//!             │             │
//!             │             └─ shortest_path (forward + backward)
//!             └─ super-source / super-target
//! ```

pub mod shortest_path;
pub mod product;
pub mod quick_linker;
pub mod rank;
pub mod projection;

pub use shortest_path::{ShortestPaths, single_source_shortest_paths};
pub use product::{
    ProductGraph, Terminals,
    add_super_nodes, build_product_graph, label_constrained_tensor_product,
};
pub use quick_linker::quick_linker;
pub use rank::{rank_results, result_order};
pub use projection::{labeled_edges, project, project_path, zip_paths};
