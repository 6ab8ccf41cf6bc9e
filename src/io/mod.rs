//! # Ingestion and export
//!
//! The boundary between tab-separated files and the in-memory pipeline.
//! Everything in `algo` and `linker` is I/O-free; this module is the only
//! place that touches readers, writers, or the filesystem.

pub mod reader;
pub mod writer;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use reader::{NodeRoles, read_graph, read_node_types};
pub use writer::{write_edge_file, write_json, write_paths_file, write_projected_edge_file};

use crate::algo::Terminals;
use crate::config::{GraphFormat, RegLinkerConfig};
use crate::linker::RegLinker;
use crate::model::{Graph, RegLinkerResult};
use crate::Result;

/// Open and read an edge-list file.
pub fn read_graph_file(path: impl AsRef<Path>, format: &GraphFormat) -> Result<Graph<String>> {
    read_graph(BufReader::new(File::open(path)?), format)
}

/// Input files of one run.
#[derive(Debug, Clone)]
pub struct InputPaths<'a> {
    pub graph: &'a Path,
    pub automaton: &'a Path,
    pub node_types: &'a Path,
}

/// Read all inputs, then run RegLinker with the configured automaton
/// start and accept states.
pub fn run_files(config: &RegLinkerConfig, inputs: &InputPaths<'_>) -> Result<Vec<RegLinkerResult<String, String>>> {
    config.validate()?;

    let g = read_graph_file(inputs.graph, &config.graph)?;
    let h = read_graph_file(inputs.automaton, &config.automaton)?;
    let roles = read_node_types(BufReader::new(File::open(inputs.node_types)?), &config.node_types)?;

    let terminals = Terminals::new(
        roles.sources,
        roles.targets,
        config.automaton_sources.clone(),
        config.automaton_targets.clone(),
    );
    Ok(RegLinker::new(&g, &h, terminals).weighted(config.weighted).run())
}
