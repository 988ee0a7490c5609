use tracing::trace;

use super::*;

/// Exact and approximate diameter of unweighted graphs.
///
/// All methods return `None` if the graph is disconnected.
pub trait Diameter: Traversal {
    /// Returns the eccentricity of `u`, i.e. the largest distance from `u` to any other vertex,
    /// or `None` if some vertex is not reachable from `u`.
    /// ** Panics if `u` is not in `1..=n` **
    fn eccentricity(&self, u: Node) -> Option<NumNodes> {
        self.bfs(u).max_level()
    }

    /// Computes the exact diameter by running a BFS from every vertex.
    ///
    /// This is exhaustive: `O(n * (n + m))` on [`AdjList`](crate::repr::AdjList) and `O(n^3)`
    /// on [`AdjMatrix`](crate::repr::AdjMatrix). Stops at the first BFS that leaves a vertex
    /// unreached.
    fn diameter(&self) -> Option<NumNodes> {
        let n = self.number_of_nodes();
        let mut diameter = 0;
        for u in self.vertices() {
            let ecc = self.eccentricity(u)?;
            diameter = diameter.max(ecc);
            trace!(progress = format_args!("{u}/{n}"), ecc, diameter, "diameter sweep");
        }
        Some(diameter)
    }

    /// Double sweep heuristic: BFS from vertex `1`, then BFS again from the farthest vertex found
    /// (the smallest one on ties) and return its eccentricity.
    ///
    /// Exact on trees and a lower bound on the diameter otherwise. Costs two BFS runs.
    fn approx_diameter(&self) -> Option<NumNodes> {
        let first = self.bfs(1);
        first.max_level()?;

        let mut farthest = 1;
        let mut max_level = 0;
        for (v, level) in self.vertices().filter_map(|v| Some((v, first.level(v)?))) {
            if level > max_level {
                max_level = level;
                farthest = v;
            }
        }

        self.eccentricity(farthest)
    }
}

impl<G> Diameter for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repr::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path() {
        for representation in [Representation::Matrix, Representation::List] {
            let graph = Graph::from_edges(4, path_edges(4), representation).unwrap();
            assert_eq!(graph.diameter(), Some(3));
            assert_eq!(graph.approx_diameter(), Some(3));
            assert_eq!(graph.eccentricity(2), Some(2));
        }
    }

    #[test]
    fn disconnected() {
        for representation in [Representation::Matrix, Representation::List] {
            let graph = Graph::from_edges(4, [(1, 2), (3, 4)], representation).unwrap();
            assert_eq!(graph.diameter(), None);
            assert_eq!(graph.approx_diameter(), None);
            assert_eq!(graph.eccentricity(3), None);
        }
    }

    #[test]
    fn single_vertex() {
        let graph = Graph::from_edges(1, std::iter::empty::<Edge>(), Representation::List).unwrap();
        assert_eq!(graph.diameter(), Some(0));
        assert_eq!(graph.approx_diameter(), Some(0));
    }

    #[test]
    fn cycle() {
        let n = 9;
        let mut edges = path_edges(n);
        edges.push(Edge(1, n));
        let graph = Graph::from_edges(n, edges, Representation::List).unwrap();
        assert_eq!(graph.diameter(), Some(4));
        assert_eq!(graph.approx_diameter(), Some(4));
    }

    #[test]
    fn approx_is_lower_bound() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [5 as NumNodes, 20, 60] {
            for _ in 0..10 {
                let mut edges = random_tree(rng, n);
                let tree = Graph::from_edges(n, edges.iter(), Representation::List).unwrap();
                assert_eq!(tree.approx_diameter(), tree.diameter());

                edges.extend(random_edges(rng, n, n as NumEdges));
                edges.iter_mut().for_each(|e| *e = e.normalized());
                edges.sort_unstable();
                edges.dedup();

                let graph = Graph::from_edges(n, edges.iter(), Representation::Matrix).unwrap();
                let exact = graph.diameter().unwrap();
                let approx = graph.approx_diameter().unwrap();
                assert!(approx <= exact);
                assert_eq!(graph.diameter(), Some(exact));
            }
        }
    }
}
