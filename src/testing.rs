/// Every representation must agree with a naive adjacency-matrix oracle
macro_rules! test_representation {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::random_edges, *};
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn graph_new() {
                for n in 1..30 {
                    let graph = <$graph>::try_from_edges(n, std::iter::empty::<Edge>()).unwrap();

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (1..=n).collect_vec());
                    assert!(graph.degrees().all(|d| d == 0));
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [2 as NumNodes, 10, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);

                            let mut oracle = vec![vec![false; n as usize + 1]; n as usize + 1];
                            for &Edge(u, v) in &edges {
                                oracle[u as usize][v as usize] = true;
                                oracle[v as usize][u as usize] = true;
                            }

                            // insert in reversed orientation to exercise sorting
                            let graph =
                                <$graph>::try_from_edges(n, edges.iter().map(|e| e.reverse()))
                                    .unwrap();

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                            assert_eq!(graph.edges().collect_vec(), edges);

                            for u in 1..=n {
                                let expected = (1..=n)
                                    .filter(|&v| oracle[u as usize][v as usize])
                                    .collect_vec();
                                assert_eq!(graph.neighbors(u), expected);
                                assert_eq!(graph.neighbors_of(u).collect_vec(), expected);
                                assert_eq!(graph.degree_of(u), expected.len() as NumNodes);

                                for v in 1..=n {
                                    assert_eq!(
                                        graph.has_edge(u, v),
                                        oracle[u as usize][v as usize]
                                    );
                                }
                            }
                        }
                    }
                }
            }

            #[test]
            fn rejects_invalid_input() {
                assert!(matches!(
                    <$graph>::try_from_edges(0, std::iter::empty::<Edge>()),
                    Err(GraphError::InvalidVertexCount(0))
                ));
                assert!(matches!(
                    <$graph>::try_from_edges(3, [(1, 4)]),
                    Err(GraphError::VertexOutOfRange { vertex: 4, n: 3 })
                ));
                assert!(matches!(
                    <$graph>::try_from_edges(3, [(0, 2)]),
                    Err(GraphError::VertexOutOfRange { vertex: 0, n: 3 })
                ));
            }

            #[test]
            #[should_panic]
            fn neighbors_out_of_range() {
                let graph = <$graph>::try_from_edges(3, [(1, 2)]).unwrap();
                let _ = graph.neighbors(4);
            }
        }
    };
}

pub(crate) use test_representation;

#[cfg(test)]
pub(crate) use generators::*;
