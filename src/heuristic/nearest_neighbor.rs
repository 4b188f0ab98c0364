use crate::{errors::TourError, graph::*, utils::Tour};

/// # Greedy nearest-neighbor construction
///
/// Starts at node 0 and repeatedly extends the path by the cheapest edge
/// into a not-yet-visited node. Equal-weight candidates resolve to the
/// smallest node id, so the construction is deterministic. Every edge is a
/// candidate, including one carrying the graph's maximum weight.
///
/// The result is an open path on all `n` nodes (`n - 1` links); no closing
/// edge back to the start is added.
///
/// Fails with [`TourError::DisconnectedGraph`] as soon as the current node
/// has no edge into an unvisited node, which on an undirected graph is the
/// case at the latest when the walk hits a different connected component.
pub fn nearest_neighbor_tour<G>(graph: &G) -> Result<Tour, TourError>
where
    G: GraphNodeOrder + WeightedAdjacency,
{
    let mut tour = Tour::new(graph.number_of_nodes());
    if graph.is_empty() {
        return Ok(tour);
    }

    let mut visited = vec![false; graph.len()];
    let mut current: Node = 0;
    visited[current as usize] = true;
    tour.set_start(current);

    for _ in 1..graph.number_of_nodes() {
        let next = graph
            .neighbors_of(current)
            .filter(|&(v, _)| !visited[v as usize])
            .min_by(|&(u, wu), &(v, wv)| wu.total_cmp(&wv).then(u.cmp(&v)))
            .map(|(v, _)| v)
            .ok_or(TourError::DisconnectedGraph { node: current })?;

        visited[next as usize] = true;
        tour.append(next);
        current = next;
    }

    debug_assert!(tour.is_complete());
    Ok(tour)
}
