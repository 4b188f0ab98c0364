use thiserror::Error;

use crate::graph::{Node, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: std::error::Error> {
    fn is_correct(&self) -> Result<(), E>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("a dense matrix on {nodes} nodes exceeds the memory limit of {limit} bytes")]
    TooLarge { nodes: NumNodes, limit: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourError {
    /// The greedy scan found no edge from `node` to an unvisited node.
    /// Reported with the external 1-based id.
    #[error("no unvisited neighbor reachable from node {}", .node + 1)]
    DisconnectedGraph { node: Node },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourStructureError {
    #[error("tour places only {placed} of {nodes} nodes")]
    Incomplete { placed: NumNodes, nodes: NumNodes },

    #[error("successor walk reaches node {} twice", .node + 1)]
    NodeRevisited { node: Node },

    #[error("predecessor/successor links disagree at node {}", .node + 1)]
    BrokenLink { node: Node },

    #[error("successor walk ends after {visited} of {nodes} nodes")]
    NotPath { visited: NumNodes, nodes: NumNodes },
}
