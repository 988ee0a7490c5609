use std::fmt::Display;

use itertools::Itertools;
use tracing::debug;

use crate::{graph::Graph, ops::*, repr::*, *};

/// An immutable, simple, undirected graph with a weight on every edge.
///
/// Besides the unweighted [`Graph`] it keeps one ascending list of [`WeightedNeighbor`]-slots per
/// vertex. The unweighted representation is built from the same sorted lists, so slot `i` of
/// `weighted_neighbors_of(u)` always describes the `i`-th vertex of `neighbors_of(u)`.
///
/// Negative weights are accepted at construction; only the shortest-path queries of
/// [`ShortestPath`](crate::algo::ShortestPath) reject them.
#[derive(Clone)]
pub struct WeightedGraph<R = AnyRepresentation> {
    graph: Graph<R>,
    adjacency: Vec<Vec<WeightedNeighbor>>,
}

impl WeightedGraph {
    /// Builds a weighted graph with vertices `1..=n` from a list of weighted edges, using the
    /// requested backend for the unweighted view. Each edge is inserted symmetrically.
    ///
    /// This is always `O(n + m log m)`, also for [`Representation::Matrix`], as the weighted
    /// slots have to be sorted.
    ///
    /// # Errors
    /// Fails if `n == 0` or an endpoint lies outside of `1..=n`.
    pub fn from_edges<I>(n: NumNodes, edges: I, representation: Representation) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        check_vertex_count(n)?;

        let mut adjacency = vec![Vec::new(); n as usize + 1];
        for WeightedEdge(u, v, weight) in edges.into_iter().map(|e| e.into()) {
            check_endpoints(n, u, v)?;
            adjacency[u as usize].push(WeightedNeighbor::new(v, weight));
            adjacency[v as usize].push(WeightedNeighbor::new(u, weight));
        }

        for slots in adjacency.iter_mut() {
            slots.sort_by_key(|nb| nb.node);
        }

        let repr: AnyRepresentation = match representation {
            Representation::List => AdjList::from_sorted_neighbors(
                adjacency
                    .iter()
                    .map(|slots| slots.iter().map(|nb| nb.node).collect_vec())
                    .collect_vec(),
            )?
            .into(),
            Representation::Matrix => AdjMatrix::try_from_edges(
                n,
                adjacency.iter().enumerate().flat_map(|(u, slots)| {
                    let u = u as Node;
                    slots
                        .iter()
                        .filter(move |nb| u < nb.node)
                        .map(move |nb| Edge(u, nb.node))
                }),
            )?
            .into(),
        };

        let graph = Self {
            graph: Graph::with_representation(repr),
            adjacency,
        };
        debug_assert!(graph.vertices().all(|u| graph
            .neighbors_of(u)
            .eq(graph.adjacency[u as usize].iter().map(|nb| nb.node))));

        debug!(
            n,
            m = graph.number_of_edges(),
            %representation,
            "constructed weighted graph"
        );
        Ok(graph)
    }

    /// Returns the backend in use for the unweighted view
    pub fn representation(&self) -> Representation {
        self.graph.representation()
    }
}

impl<R: AdjacencyList> WeightedGraph<R> {
    /// Returns the unweighted view of the graph
    pub fn graph(&self) -> &Graph<R> {
        &self.graph
    }

    /// Returns the weighted slots of `u` in ascending neighbor order.
    /// ** Panics if `u` is not in `1..=n` **
    pub fn weighted_neighbors(&self, u: Node) -> &[WeightedNeighbor] {
        self.assert_vertex(u);
        &self.adjacency[u as usize]
    }

    /// Returns the weight of edge `{u, v}` or `None` if the edge does not exist.
    /// ** Panics if `u` is not in `1..=n` **
    pub fn weight(&self, u: Node, v: Node) -> Option<Weight> {
        let slots = self.weighted_neighbors(u);
        slots
            .binary_search_by_key(&v, |nb| nb.node)
            .ok()
            .map(|i| slots[i].weight)
    }

    /// Returns the first edge (in vertex order) whose weight is negative or NaN
    pub fn first_invalid_weight(&self) -> Option<WeightedEdge> {
        self.vertices().find_map(|u| {
            self.adjacency[u as usize]
                .iter()
                .find(|nb| !(nb.weight >= 0.0))
                .map(|nb| WeightedEdge(u, nb.node, nb.weight))
        })
    }
}

impl<R: GraphNodeOrder> GraphNodeOrder for WeightedGraph<R> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl<R: AdjacencyList> AdjacencyList for WeightedGraph<R> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }

    fn neighbors(&self, u: Node) -> Vec<Node> {
        self.graph.neighbors(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl<R: AdjacencyTest> AdjacencyTest for WeightedGraph<R> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }
}

impl<R: AdjacencyList> WeightedAdjacencyList for WeightedGraph<R> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = WeightedNeighbor> + '_ {
        self.weighted_neighbors(u).iter().copied()
    }
}

/// Always printed as a weighted adjacency list, independent of the backend
impl<R: AdjacencyList> Display for WeightedGraph<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vertices: {}", self.number_of_nodes())?;
        writeln!(f, "Weighted adjacency list:")?;
        for u in self.vertices() {
            writeln!(
                f,
                "{u}: {}",
                self.adjacency[u as usize]
                    .iter()
                    .map(|nb| format!("{}({})", nb.node, nb.weight))
                    .join(" ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_weighted_edges;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn weights_aligned_with_neighbors() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for representation in [Representation::Matrix, Representation::List] {
            for n in [2 as NumNodes, 10, 40] {
                let edges = random_weighted_edges(rng, n, n as NumEdges * 4, 100);
                let graph = WeightedGraph::from_edges(
                    n,
                    edges.iter().map(|e| WeightedEdge(e.1, e.0, e.2)),
                    representation,
                )
                .unwrap();

                assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                assert_eq!(graph.weighted_edges().collect_vec(), edges);

                for u in 1..=n {
                    let nodes = graph.weighted_neighbors_of(u).map(|nb| nb.node).collect_vec();
                    assert_eq!(nodes, graph.neighbors(u));
                    assert_eq!(graph.weights_of(u).count(), graph.degree_of(u) as usize);
                }

                for &WeightedEdge(u, v, w) in &edges {
                    assert_eq!(graph.weight(u, v), Some(w));
                    assert_eq!(graph.weight(v, u), Some(w));
                }
            }
        }
    }

    #[test]
    fn invalid_weights_are_found_not_rejected() {
        let graph = WeightedGraph::from_edges(
            3,
            [(1, 2, 1.0), (2, 3, -0.5)],
            Representation::List,
        )
        .unwrap();
        assert_eq!(graph.first_invalid_weight(), Some(WeightedEdge(2, 3, -0.5)));
        assert_eq!(graph.weight(1, 3), None);
    }

    #[test]
    fn display() {
        let graph =
            WeightedGraph::from_edges(3, [(1, 3, 5.0), (1, 2, 1.5)], Representation::Matrix)
                .unwrap();
        assert_eq!(
            graph.to_string(),
            "Vertices: 3\nWeighted adjacency list:\n1: 2(1.5) 3(5)\n2: 1(1.5)\n3: 1(5)\n"
        );
    }
}
