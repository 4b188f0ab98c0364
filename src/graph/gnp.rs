use std::ops::Range;

use rand::Rng;

use crate::graph::*;

pub trait WeightedGnpGenerator: Sized {
    /// Generates a Gilbert (also, wrongly, known as Erdos-Reyni) graph
    /// `G(n,p)`: n nodes where each of the `n(n-1)/2` possible edges exists
    /// independently with probability `p`. Edge weights are drawn uniformly
    /// from `weights`.
    fn random_weighted_gnp<R: Rng>(rng: &mut R, n: Node, p: f64, weights: Range<Weight>) -> Self;
}

impl<G> WeightedGnpGenerator for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn random_weighted_gnp<R: Rng>(rng: &mut R, n: Node, p: f64, weights: Range<Weight>) -> Self {
        debug_assert!((0.0..=1.0).contains(&p));
        let mut result = Self::new(n);

        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(p) {
                    result.set_edge(u, v, rng.gen_range(weights.clone()));
                }
            }
        }

        result
    }
}
