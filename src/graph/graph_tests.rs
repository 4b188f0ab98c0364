#[macro_export]
macro_rules! impl_graph_tests {
    ($graph : ty) => {
        #[cfg(test)]
        mod graph_tests {
            use itertools::Itertools;

            use super::*;

            #[test]
            fn new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.max_weight(), None);

                    assert_eq!(graph.vertices_range().len(), n as usize);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                }
            }

            #[test]
            fn symmetric_assignment() {
                let mut graph = <$graph>::new(4);
                graph.set_edges([(0, 1, 5.0), (3, 2, 2.5)]);

                assert_eq!(graph.weight_of(0, 1), Some(5.0));
                assert_eq!(graph.weight_of(1, 0), Some(5.0));
                assert_eq!(graph.weight_of(2, 3), Some(2.5));
                assert_eq!(graph.weight_of(3, 2), Some(2.5));
                assert_eq!(graph.weight_of(0, 2), None);
                assert_eq!(graph.number_of_edges(), 2);
            }

            #[test]
            fn last_write_wins() {
                let mut graph = <$graph>::new(3);

                assert_eq!(graph.try_set_edge(0, 1, 5.0), None);
                assert_eq!(graph.try_set_edge(1, 0, 2.0), Some(5.0));

                assert_eq!(graph.weight_of(0, 1), Some(2.0));
                assert_eq!(graph.weight_of(1, 0), Some(2.0));
                assert_eq!(graph.number_of_edges(), 1);
            }

            #[test]
            fn running_max_weight() {
                let mut graph = <$graph>::new(3);

                graph.set_edge(0, 1, 3.0);
                assert_eq!(graph.max_weight(), Some(3.0));

                graph.set_edge(1, 2, 7.0);
                assert_eq!(graph.max_weight(), Some(7.0));

                // overwriting the heaviest edge does not lower the maximum
                graph.set_edge(1, 2, 1.0);
                assert_eq!(graph.weight_of(1, 2), Some(1.0));
                assert_eq!(graph.max_weight(), Some(7.0));
            }

            #[test]
            fn degrees_and_neighbors() {
                let graph =
                    <$graph>::test_only_from([(0, 1, 1.0), (0, 2, 2.0), (0, 3, 3.0), (2, 3, 4.0)]);

                assert_eq!(graph.degree_of(0), 3);
                assert_eq!(graph.degree_of(1), 1);
                assert_eq!(graph.degree_of(2), 2);

                let mut neighbors = graph.neighbors_of(0).collect_vec();
                neighbors.sort_by(|a, b| a.0.cmp(&b.0));
                assert_eq!(neighbors, vec![(1, 1.0), (2, 2.0), (3, 3.0)]);

                assert!(graph.has_edge(3, 2));
                assert!(!graph.has_edge(1, 2));
            }

            #[test]
            fn edges_are_normalized_and_unique() {
                let input = [(1, 0, 1.0), (2, 1, 2.0), (3, 0, 3.0)];
                let graph = <$graph>::test_only_from(input);

                let mut edges = graph.edges().collect_vec();
                edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

                assert_eq!(edges, vec![Edge(0, 1, 1.0), Edge(0, 3, 3.0), Edge(1, 2, 2.0)]);
                assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
            }

            #[test]
            #[should_panic]
            fn rejects_self_loops() {
                let mut graph = <$graph>::new(2);
                graph.set_edge(1, 1, 1.0);
            }
        }
    };
}

pub use impl_graph_tests;
