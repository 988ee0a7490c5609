use std::fmt::Display;

use tracing::debug;

use crate::{ops::*, repr::*, *};

/// An immutable, simple, undirected graph owning exactly one representation.
///
/// All algorithms of [`algo`](crate::algo) are available on it through the traits
/// implemented for every [`AdjacencyList`].
#[derive(Clone)]
pub struct Graph<R = AnyRepresentation> {
    repr: R,
}

impl Graph {
    /// Builds a graph with vertices `1..=n` from an edge list, using the requested backend.
    /// Each edge `(u, v)` is inserted symmetrically.
    ///
    /// # Errors
    /// Fails if `n == 0` or an endpoint lies outside of `1..=n`.
    pub fn from_edges<I>(n: NumNodes, edges: I, representation: Representation) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let graph = Self {
            repr: AnyRepresentation::try_from_edges(n, edges, representation)?,
        };
        debug!(
            n,
            m = graph.number_of_edges(),
            %representation,
            "constructed graph"
        );
        Ok(graph)
    }

    /// Returns the backend in use
    pub fn representation(&self) -> Representation {
        self.repr.representation()
    }
}

impl<R: AdjacencyList> Graph<R> {
    /// Wraps an already constructed representation, taking ownership of it
    pub fn with_representation(repr: R) -> Self {
        Self { repr }
    }

    /// Returns the underlying representation
    pub fn inner(&self) -> &R {
        &self.repr
    }

    /// Consumes the graph and returns the underlying representation
    pub fn into_inner(self) -> R {
        self.repr
    }
}

impl<R: GraphNodeOrder> GraphNodeOrder for Graph<R> {
    fn number_of_nodes(&self) -> NumNodes {
        self.repr.number_of_nodes()
    }
}

impl<R: AdjacencyList> AdjacencyList for Graph<R> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.repr.neighbors_of(u)
    }

    fn neighbors(&self, u: Node) -> Vec<Node> {
        self.repr.neighbors(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.repr.degree_of(u)
    }
}

impl<R: AdjacencyTest> AdjacencyTest for Graph<R> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.repr.has_edge(u, v)
    }
}

impl<R: Display> Display for Graph<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.repr, f)
    }
}
