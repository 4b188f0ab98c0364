use fxhash::FxHashMap;

use super::*;

/// Sparse adjacency structure: one neighbor-to-weight map per node. The
/// representation of choice once a dense matrix no longer
/// [fits](DenseGraph::fits) in memory.
#[derive(Clone, Debug)]
pub struct AdjArray {
    adj: Vec<Neighborhood>,
    number_of_edges: NumEdges,
    max_weight: Option<Weight>,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl WeightedAdjacency for AdjArray {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        assert!(v < self.number_of_nodes());
        self.adj[u as usize].weight_of(v)
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> {
        self.adj[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].degree()
    }

    fn max_weight(&self) -> Option<Weight> {
        self.max_weight
    }
}

impl GraphNew for AdjArray {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Default::default(); number_of_nodes as usize],
            number_of_edges: 0,
            max_weight: None,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_set_edge(&mut self, u: Node, v: Node, weight: Weight) -> Option<Weight> {
        assert_ne!(u, v);
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());
        debug_assert!(weight.is_finite() && weight >= 0.0);

        let previous = self.adj[u as usize].try_set(v, weight);
        let _mirrored = self.adj[v as usize].try_set(u, weight);
        debug_assert_eq!(previous, _mirrored);

        if previous.is_none() {
            self.number_of_edges += 1;
        }
        self.max_weight = Some(self.max_weight.map_or(weight, |m| m.max(weight)));

        previous
    }
}

impl AdjArray {
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

#[derive(Default, Clone, Debug)]
struct Neighborhood {
    weights: FxHashMap<Node, Weight>,
}

impl Neighborhood {
    fn degree(&self) -> NumNodes {
        self.weights.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> {
        self.weights.iter().map(|(&v, &w)| (v, w))
    }

    fn weight_of(&self, v: Node) -> Option<Weight> {
        self.weights.get(&v).copied()
    }

    fn try_set(&mut self, v: Node, weight: Weight) -> Option<Weight> {
        self.weights.insert(v, weight)
    }
}

super::graph_tests::impl_graph_tests!(AdjArray);
