use std::fmt::Display;

use itertools::Itertools;
use stream_bitset::prelude::*;

use super::*;
use crate::testing::test_representation;

/// An undirected graph stored as a symmetric adjacency matrix.
///
/// Row `u` is a bitset over `0..=n` whose bit `v` is set iff `{u, v}` is an edge.
/// Row `0` and column `0` stay empty.
#[derive(Clone)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
}

impl AdjMatrix {
    /// Creates a graph with `n` singleton nodes.
    /// ** Panics if `n == 0` **
    pub fn new(n: NumNodes) -> Self {
        assert!(n > 0, "A graph needs at least one vertex");
        Self {
            rows: vec![NodeBitSet::new(n + 1); n as usize + 1],
        }
    }

    /// Inserts `{u, v}` symmetrically. Inserting an existing edge is a non-op.
    fn insert_edge(&mut self, u: Node, v: Node) {
        self.rows[u as usize].set_bit(v);
        self.rows[v as usize].set_bit(u);
    }
}

impl GraphFromScratch for AdjMatrix {
    fn try_from_edges<I>(n: NumNodes, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        check_vertex_count(n)?;
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            check_endpoints(n, u, v)?;
            graph.insert_edge(u, v);
        }
        Ok(graph)
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        (self.rows.len() - 1) as NumNodes
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.assert_vertex(u);
        self.rows[u as usize].iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.assert_vertex(u);
        self.rows[u as usize].cardinality()
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_vertex(u);
        self.assert_vertex(v);
        self.rows[u as usize].get_bit(v)
    }
}

impl Display for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vertices: {}", self.number_of_nodes())?;
        writeln!(f, "Adjacency matrix:")?;
        for u in self.vertices() {
            let row = &self.rows[u as usize];
            writeln!(
                f,
                "{}",
                self.vertices()
                    .map(|v| if row.get_bit(v) { '1' } else { '0' })
                    .join(" ")
            )?;
        }
        Ok(())
    }
}

test_representation!(test_adj_matrix, AdjMatrix);
