pub mod adj_array;
pub mod edge;
pub mod gnp;
pub mod graph_tests;
pub mod matrix;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;
pub type Weight = f64;

use std::ops::Range;

pub use adj_array::*;
pub use edge::*;
pub use gnp::*;
pub use matrix::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> {
        self.vertices_range()
    }

    /// Returns the vertices as a range, which does not borrow self and hence
    /// may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of undirected edges of the graph; each edge is
    /// counted once regardless of orientation
    fn number_of_edges(&self) -> NumEdges;
}

/// Read access to a symmetric, weighted adjacency structure.
///
/// Absent edges are `None`; there is no in-band "infinity" weight.
pub trait WeightedAdjacency: GraphNodeOrder {
    /// Returns the weight of the undirected edge {u, v}, or None if the
    /// nodes are not adjacent.
    /// ** Panics if u >= n or v >= n **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns an iterator over the neighbors of `u` with their weights.
    /// No order is guaranteed.
    /// ** Panics if u >= n **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)>;

    /// Returns the number of neighbors of `u`
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Largest weight ever assigned to an edge of this graph, i.e. the
    /// running maximum over all assignments. Overwriting an edge with a
    /// smaller weight does not lower it. None iff no edge was ever assigned.
    fn max_weight(&self) -> Option<Weight>;

    /// Returns an iterator over all undirected edges, each reported once
    /// with its endpoints in increasing order
    fn edges(&self) -> impl Iterator<Item = Edge> {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter_map(move |(v, w)| (u < v).then_some(Edge(u, v, w)))
        })
    }
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if the graph contains the edge {u, v}
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

impl<G: WeightedAdjacency> AdjacencyTest for G {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }
}

pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to assign edge weights
pub trait GraphEdgeEditing: GraphNew {
    /// Assigns `weight` to the undirected edge {u, v}. The assignment is
    /// symmetric and a previous weight is overwritten (last write wins).
    /// ** Panics if u == v or u, v >= n **
    fn set_edge(&mut self, u: Node, v: Node, weight: Weight) {
        self.try_set_edge(u, v, weight);
    }

    /// Like [`GraphEdgeEditing::set_edge`], but returns the weight the edge
    /// carried before the assignment (None if the edge is new).
    fn try_set_edge(&mut self, u: Node, v: Node, weight: Weight) -> Option<Weight>;

    fn set_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.set_edge(u, v, w);
        }
    }
}
