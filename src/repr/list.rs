use std::fmt::Display;

use itertools::Itertools;

use super::*;
use crate::testing::test_representation;

/// An undirected graph stored as one ascending neighbor list per vertex.
///
/// `nbs[0]` exists but is always empty.
#[derive(Clone)]
pub struct AdjList {
    nbs: Vec<Vec<Node>>,
}

impl AdjList {
    /// Takes ownership of already built neighbor lists without sorting them.
    /// `nbs[u]` must hold the neighbors of `u` in strictly ascending order and `nbs[0]` must
    /// be empty, i.e. `nbs.len() == n + 1`.
    ///
    /// # Errors
    /// Fails if `nbs` describes a graph without vertices.
    pub fn from_sorted_neighbors(nbs: Vec<Vec<Node>>) -> GraphResult<Self> {
        if nbs.len() < 2 {
            return Err(GraphError::InvalidVertexCount(nbs.len() as i64 - 1));
        }
        debug_assert!(nbs[0].is_empty());
        debug_assert!(
            nbs.iter()
                .all(|list| list.iter().tuple_windows().all(|(a, b)| a < b))
        );

        Ok(Self { nbs })
    }

    /// Returns a slice-reference of the neighborhood of a given vertex
    /// ** Panics if `u` is not in `1..=n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.assert_vertex(u);
        &self.nbs[u as usize]
    }
}

impl GraphFromScratch for AdjList {
    fn try_from_edges<I>(n: NumNodes, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        check_vertex_count(n)?;
        let mut nbs = vec![Vec::new(); n as usize + 1];
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            check_endpoints(n, u, v)?;
            nbs[u as usize].push(v);
            nbs[v as usize].push(u);
        }

        for list in nbs.iter_mut() {
            list.sort_unstable();
        }

        Ok(Self { nbs })
    }
}

impl GraphNodeOrder for AdjList {
    fn number_of_nodes(&self) -> NumNodes {
        (self.nbs.len() - 1) as NumNodes
    }
}

impl AdjacencyList for AdjList {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.as_neighbors_slice(u).iter().copied()
    }

    fn neighbors(&self, u: Node) -> Vec<Node> {
        self.as_neighbors_slice(u).to_vec()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.as_neighbors_slice(u).len() as NumNodes
    }
}

impl AdjacencyTest for AdjList {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_vertex(v);
        self.as_neighbors_slice(u).binary_search(&v).is_ok()
    }
}

impl Display for AdjList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vertices: {}", self.number_of_nodes())?;
        writeln!(f, "Adjacency list:")?;
        for u in self.vertices() {
            writeln!(f, "{u}: {}", self.nbs[u as usize].iter().join(" "))?;
        }
        Ok(())
    }
}

test_representation!(test_adj_list, AdjList);
