use super::*;

/// Number and sizes of the connected components of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
    /// Number of connected components
    pub count: NumNodes,
    /// Number of vertices of the largest component
    pub largest: NumNodes,
    /// Number of vertices of the smallest component
    pub smallest: NumNodes,
}

/// Connected component labeling for undirected graphs
pub trait Connectivity: Traversal {
    /// Labels every vertex with the index of its connected component.
    ///
    /// Components are numbered `0, 1, ...` in the order of their smallest vertex. Slot `0` of
    /// the result is `None`, every other slot is `Some`. Runs in `O(n + m)` in total as the
    /// visited array is shared between all BFS runs.
    fn component_labels(&self) -> Vec<Option<NumNodes>> {
        let mut labels = vec![None; self.len() + 1];
        let mut marker = 0;
        for u in self.vertices() {
            if labels[u as usize].is_none() {
                self.bfs_visited(u, &mut labels, marker);
                marker += 1;
            }
        }
        labels
    }

    /// Returns the connected components, each as an ascending list of its vertices, sorted by
    /// descending size. Components of equal size keep the order of their smallest vertex.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(5, [(1, 5), (2, 3), (3, 4)], Representation::List).unwrap();
    /// assert_eq!(g.connected_components(), vec![vec![2, 3, 4], vec![1, 5]]);
    /// ```
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let labels = self.component_labels();
        let count = labels.iter().flatten().max().map_or(0, |&l| l as usize + 1);

        let mut components = vec![Vec::new(); count];
        for u in self.vertices() {
            if let Some(label) = labels[u as usize] {
                components[label as usize].push(u);
            }
        }

        // stable, so ties keep labeling order
        components.sort_by(|a, b| b.len().cmp(&a.len()));
        components
    }

    /// Returns number, largest and smallest size of the connected components without
    /// materializing them
    fn connected_component_info(&self) -> ComponentInfo {
        let labels = self.component_labels();
        let mut sizes: Vec<NumNodes> = Vec::new();
        for label in labels.iter().flatten() {
            let label = *label as usize;
            if label >= sizes.len() {
                sizes.resize(label + 1, 0);
            }
            sizes[label] += 1;
        }

        ComponentInfo {
            count: sizes.len() as NumNodes,
            largest: sizes.iter().copied().max().unwrap_or(0),
            smallest: sizes.iter().copied().min().unwrap_or(0),
        }
    }

    /// Returns *true* if the graph consists of a single connected component
    fn is_connected(&self) -> bool {
        self.bfs(1).number_reached() == self.number_of_nodes()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repr::*, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path_is_one_component() {
        for representation in [Representation::Matrix, Representation::List] {
            let graph = Graph::from_edges(4, path_edges(4), representation).unwrap();
            assert_eq!(graph.connected_components(), vec![vec![1, 2, 3, 4]]);
            assert_eq!(
                graph.component_labels(),
                vec![None, Some(0), Some(0), Some(0), Some(0)]
            );
            assert!(graph.is_connected());
            assert_eq!(
                graph.connected_component_info(),
                ComponentInfo {
                    count: 1,
                    largest: 4,
                    smallest: 4
                }
            );
        }
    }

    #[test]
    fn two_components() {
        for representation in [Representation::Matrix, Representation::List] {
            let graph = Graph::from_edges(4, [(1, 2), (3, 4)], representation).unwrap();
            assert_eq!(graph.connected_components(), vec![vec![1, 2], vec![3, 4]]);
            assert!(!graph.is_connected());
        }
    }

    #[test]
    fn smallest_component() {
        let graph = Graph::from_edges(6, [(1, 2), (2, 3), (5, 6)], Representation::List).unwrap();
        assert_eq!(
            graph.connected_component_info(),
            ComponentInfo {
                count: 3,
                largest: 3,
                smallest: 1
            }
        );
        assert_eq!(
            graph.connected_components(),
            vec![vec![1, 2, 3], vec![5, 6], vec![4]]
        );
    }

    #[test]
    fn components_partition_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [1 as NumNodes, 10, 50, 200] {
            for m_ub in [n / 2, n, n * 3] {
                let edges = random_edges(rng, n, m_ub as NumEdges);
                let graph = Graph::from_edges(n, edges.iter(), Representation::List).unwrap();
                let components = graph.connected_components();

                assert!(components.iter().tuple_windows().all(|(a, b)| a.len() >= b.len()));
                assert_eq!(
                    components.iter().flatten().copied().sorted().collect_vec(),
                    (1..=n).collect_vec()
                );

                // every edge stays inside a component
                let labels = graph.component_labels();
                assert!(edges.iter().all(|&Edge(u, v)| labels[u as usize] == labels[v as usize]));

                let info = graph.connected_component_info();
                assert_eq!(info.count as usize, components.len());
                assert_eq!(info.largest as usize, components[0].len());
                assert_eq!(info.smallest as usize, components.last().unwrap().len());

                let matrix = Graph::from_edges(n, edges.iter(), Representation::Matrix).unwrap();
                assert_eq!(matrix.connected_components(), components);
            }
        }
    }
}
