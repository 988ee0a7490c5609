use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V, i.e. `1..=n`
    fn vertices(&self) -> RangeInclusive<Node> {
        node_range(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_vertex(&self, u: Node) -> bool {
        (1..=self.number_of_nodes()).contains(&u)
    }

    /// Panics with a descriptive message if `u` is not a vertex of the graph
    #[track_caller]
    fn assert_vertex(&self, u: Node) {
        assert!(
            self.contains_vertex(u),
            "Vertex {u} out of range 1..={}",
            self.number_of_nodes()
        );
    }
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// Every implementation yields neighbors in strictly ascending order.
/// The traversals in [`algo`](crate::algo) rely on this for reproducible results.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex in ascending order.
    /// ** Panics if `u` is not in `1..=n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns a copy of the neighborhood of a given vertex in ascending order.
    /// ** Panics if `u` is not in `1..=n` **
    fn neighbors(&self, u: Node) -> Vec<Node> {
        self.neighbors_of(u).collect_vec()
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u` is not in `1..=n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of `1..=n`
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the number of (undirected) edges, i.e. half the sum of all degrees
    fn number_of_edges(&self) -> NumEdges {
        self.degrees().map(|d| d as NumEdges).sum::<NumEdges>() / 2
    }

    /// Returns an iterator over all normalized edges `(u, v)` with `u < v` in sorted order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&v| u < v)
                .map(move |v| Edge(u, v))
        })
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde {u,v} exists in the graph.
    /// ** Panics if `u` or `v` is out of range **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Adjacency access for graphs carrying a weight on every edge.
///
/// `weighted_neighbors_of(u)` visits exactly the neighbors of `neighbors_of(u)` in the same
/// (ascending) order, each paired with the weight of the edge leading to it.
pub trait WeightedAdjacencyList: AdjacencyList {
    /// Returns an iterator over `(neighbor, weight)`-slots of a given vertex.
    /// ** Panics if `u` is not in `1..=n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = WeightedNeighbor> + '_;

    /// Returns the weights of the edges adjacent to `u`, aligned with `neighbors_of(u)`.
    /// ** Panics if `u` is not in `1..=n` **
    fn weights_of(&self, u: Node) -> impl Iterator<Item = Weight> + '_ {
        self.weighted_neighbors_of(u).map(|nb| nb.weight)
    }

    /// Returns an iterator over all normalized weighted edges `(u, v, w)` with `u < v`
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.weighted_neighbors_of(u)
                .filter(move |nb| u < nb.node)
                .map(move |nb| WeightedEdge(u, nb.node, nb.weight))
        })
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Creates a graph with vertices `1..=n` and inserts every edge symmetrically.
    ///
    /// # Errors
    /// Fails if `n == 0` or if any endpoint lies outside of `1..=n`.
    fn try_from_edges<I>(n: NumNodes, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}

/// Fails unless the graph has at least one vertex
pub(crate) fn check_vertex_count(n: NumNodes) -> GraphResult<()> {
    if n == 0 {
        Err(GraphError::InvalidVertexCount(0))
    } else {
        Ok(())
    }
}

/// Fails unless both endpoints are in `1..=n`
pub(crate) fn check_endpoints(n: NumNodes, u: Node, v: Node) -> GraphResult<()> {
    for x in [u, v] {
        if !(1..=n).contains(&x) {
            return Err(GraphError::VertexOutOfRange {
                vertex: x as i64,
                n,
            });
        }
    }
    Ok(())
}
