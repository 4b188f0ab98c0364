use std::mem::size_of;

use super::*;
use crate::errors::GraphError;

/// Byte budget for the cell array of a [`DenseGraph`]. Inputs whose matrix
/// would exceed it must use [`AdjArray`] instead.
pub const DENSE_MEMORY_LIMIT: usize = 1 << 30;

/// Dense symmetric adjacency matrix with one `Option<Weight>` cell per
/// ordered node pair. Row-major, `None` meaning "no edge".
#[derive(Clone)]
pub struct DenseGraph {
    number_of_nodes: NumNodes,
    cells: Vec<Option<Weight>>,
    number_of_edges: NumEdges,
    max_weight: Option<Weight>,
}

impl DenseGraph {
    /// True iff the cell array of a graph on `n` nodes stays within
    /// [`DENSE_MEMORY_LIMIT`].
    pub fn fits(n: NumNodes) -> bool {
        (n as usize)
            .checked_mul(n as usize)
            .and_then(|cells| cells.checked_mul(size_of::<Option<Weight>>()))
            .is_some_and(|bytes| bytes <= DENSE_MEMORY_LIMIT)
    }

    /// Fallible twin of [`GraphNew::new`] for callers that cannot bound the
    /// declared node count up front.
    pub fn try_new(number_of_nodes: NumNodes) -> Result<Self, GraphError> {
        if !Self::fits(number_of_nodes) {
            return Err(GraphError::TooLarge {
                nodes: number_of_nodes,
                limit: DENSE_MEMORY_LIMIT,
            });
        }

        Ok(Self {
            number_of_nodes,
            cells: vec![None; (number_of_nodes as usize) * (number_of_nodes as usize)],
            number_of_edges: 0,
            max_weight: None,
        })
    }

    fn cell_index(&self, u: Node, v: Node) -> usize {
        assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        (u as usize) * (self.number_of_nodes as usize) + (v as usize)
    }

    fn row(&self, u: Node) -> &[Option<Weight>] {
        let begin = self.cell_index(u, 0);
        &self.cells[begin..begin + self.number_of_nodes as usize]
    }

    pub fn test_only_from(edges: impl Clone + IntoIterator<Item = impl Into<Edge>>) -> Self {
        let n = edges
            .clone()
            .into_iter()
            .map(|e| e.into())
            .map(|e| e.0.max(e.1) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Self::new(n as NumNodes);

        graph.set_edges(edges);

        graph
    }
}

impl GraphNodeOrder for DenseGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl GraphEdgeOrder for DenseGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl WeightedAdjacency for DenseGraph {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.cells[self.cell_index(u, v)]
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, w)| w.map(|w| (v as Node, w)))
    }

    fn max_weight(&self) -> Option<Weight> {
        self.max_weight
    }
}

impl GraphNew for DenseGraph {
    fn new(number_of_nodes: NumNodes) -> Self {
        match Self::try_new(number_of_nodes) {
            Ok(graph) => graph,
            Err(e) => panic!("{e}"),
        }
    }
}

impl GraphEdgeEditing for DenseGraph {
    fn try_set_edge(&mut self, u: Node, v: Node, weight: Weight) -> Option<Weight> {
        assert_ne!(u, v);
        debug_assert!(weight.is_finite() && weight >= 0.0);

        let index_uv = self.cell_index(u, v);
        let index_vu = self.cell_index(v, u);

        let previous = self.cells[index_uv].replace(weight);
        self.cells[index_vu] = Some(weight);

        if previous.is_none() {
            self.number_of_edges += 1;
        }
        self.max_weight = Some(self.max_weight.map_or(weight, |m| m.max(weight)));

        previous
    }
}

impl std::fmt::Debug for DenseGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DenseGraph")
            .field("number_of_nodes", &self.number_of_nodes)
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

super::graph_tests::impl_graph_tests!(DenseGraph);
