use rand::Rng;

use super::graph::*;
use super::utils::Tour;

/// Random connected instance: a random-weight path backbone over a shuffled
/// node order, plus G(n,p)-style extra edges. Every node is reachable, so
/// the greedy construction cannot strand.
pub fn random_connected_graph(rng: &mut impl Rng, n: NumNodes, extra_p: f64) -> AdjArray {
    let mut order: Vec<Node> = (0..n).collect();
    for i in (1..order.len()).rev() {
        order.swap(i, rng.gen_range(0..=i));
    }

    let mut graph = AdjArray::new(n);
    for pair in order.windows(2) {
        graph.set_edge(pair[0], pair[1], rng.gen_range(1.0..100.0));
    }

    for u in 0..n {
        for v in (u + 1)..n {
            if !graph.has_edge(u, v) && rng.gen_bool(extra_p) {
                graph.set_edge(u, v, rng.gen_range(1.0..100.0));
            }
        }
    }

    graph
}

/// A valid tour starts at node 0, visits every node exactly once, and only
/// moves along edges of the graph.
pub fn assert_valid_tour(graph: &(impl GraphNodeOrder + WeightedAdjacency), tour: &Tour) {
    let order: Vec<Node> = tour.iter().collect();

    assert_eq!(order.len(), graph.len());
    assert_eq!(order.first(), (graph.len() > 0).then_some(&0));

    let mut seen = vec![false; graph.len()];
    for &u in &order {
        assert!(!seen[u as usize], "node {u} visited twice");
        seen[u as usize] = true;
    }

    for pair in order.windows(2) {
        assert!(
            graph.has_edge(pair[0], pair[1]),
            "tour moves along the non-edge {{{}, {}}}",
            pair[0],
            pair[1]
        );
    }
}
