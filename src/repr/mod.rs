/*!
# Graph Representations

Two storage backends implement the same capability set ([`GraphNodeOrder`], [`AdjacencyList`],
[`AdjacencyTest`], [`Display`](std::fmt::Display)):

- [`AdjMatrix`]: one bit-row per vertex. `neighbors_of(v)` scans the whole row (`O(n)`),
  memory is `O(n^2)` bits. Preferable for dense graphs or few vertices.
- [`AdjList`]: one ascending `Vec<Node>` per vertex. `neighbors_of(v)` runs in `O(deg(v))`,
  construction sorts every list once. Preferable for large sparse graphs.

The backend is picked once via [`Representation`] and is fixed for the lifetime of the graph.
[`AnyRepresentation`] is the closed set of both backends behind a single type.
*/

use std::{fmt::Display, str::FromStr};

use itertools::Either;

use crate::{ops::*, *};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

/// Selects the storage backend of a graph
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Adjacency matrix ([`AdjMatrix`])
    Matrix,
    /// Sorted adjacency lists ([`AdjList`])
    #[default]
    List,
}

impl Representation {
    /// Maps the classic `use_matrix` switch onto a representation
    pub fn from_use_matrix(use_matrix: bool) -> Self {
        if use_matrix { Self::Matrix } else { Self::List }
    }
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        match s.to_lowercase().as_str() {
            "matrix" => Ok(Self::Matrix),
            "list" => Ok(Self::List),
            _ => Err(GraphError::Parse(format!("Unknown Representation: {s}"))),
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matrix => write!(f, "matrix"),
            Self::List => write!(f, "list"),
        }
    }
}

/// Either of the two backends, chosen at runtime
#[derive(Clone)]
pub enum AnyRepresentation {
    Matrix(AdjMatrix),
    List(AdjList),
}

impl AnyRepresentation {
    /// Builds the requested backend from an edge list
    pub fn try_from_edges<I>(
        n: NumNodes,
        edges: I,
        representation: Representation,
    ) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        Ok(match representation {
            Representation::Matrix => Self::Matrix(AdjMatrix::try_from_edges(n, edges)?),
            Representation::List => Self::List(AdjList::try_from_edges(n, edges)?),
        })
    }

    /// Returns which backend is in use
    pub fn representation(&self) -> Representation {
        match self {
            Self::Matrix(_) => Representation::Matrix,
            Self::List(_) => Representation::List,
        }
    }
}

impl From<AdjMatrix> for AnyRepresentation {
    fn from(value: AdjMatrix) -> Self {
        Self::Matrix(value)
    }
}

impl From<AdjList> for AnyRepresentation {
    fn from(value: AdjList) -> Self {
        Self::List(value)
    }
}

impl GraphNodeOrder for AnyRepresentation {
    fn number_of_nodes(&self) -> NumNodes {
        match self {
            Self::Matrix(m) => m.number_of_nodes(),
            Self::List(l) => l.number_of_nodes(),
        }
    }
}

impl AdjacencyList for AnyRepresentation {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        match self {
            Self::Matrix(m) => Either::Left(m.neighbors_of(u)),
            Self::List(l) => Either::Right(l.neighbors_of(u)),
        }
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        match self {
            Self::Matrix(m) => m.degree_of(u),
            Self::List(l) => l.degree_of(u),
        }
    }
}

impl AdjacencyTest for AnyRepresentation {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        match self {
            Self::Matrix(m) => m.has_edge(u, v),
            Self::List(l) => l.has_edge(u, v),
        }
    }
}

impl Display for AnyRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matrix(m) => Display::fmt(m, f),
            Self::List(l) => Display::fmt(l, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_edges;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn parse_representation() {
        assert_eq!("matrix".parse::<Representation>().unwrap(), Representation::Matrix);
        assert_eq!("List".parse::<Representation>().unwrap(), Representation::List);
        assert!("csr".parse::<Representation>().is_err());
        assert_eq!(Representation::from_use_matrix(true), Representation::Matrix);
        assert_eq!(Representation::default(), Representation::List);
        assert_eq!(Representation::Matrix.to_string(), "matrix");
    }

    #[test]
    fn backends_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1 as NumNodes, 5, 20, 60] {
            for m_ub in [n, n * 3, n * 8] {
                let edges = random_edges(rng, n, m_ub as NumEdges);

                let matrix =
                    AnyRepresentation::try_from_edges(n, edges.iter(), Representation::Matrix)
                        .unwrap();
                let list =
                    AnyRepresentation::try_from_edges(n, edges.iter(), Representation::List)
                        .unwrap();

                assert_eq!(matrix.representation(), Representation::Matrix);
                assert_eq!(list.representation(), Representation::List);
                assert_eq!(matrix.number_of_nodes(), list.number_of_nodes());
                assert_eq!(matrix.number_of_edges(), edges.len() as NumEdges);
                assert_eq!(list.number_of_edges(), edges.len() as NumEdges);

                for u in 1..=n {
                    let nbs = list.neighbors(u);
                    assert_eq!(matrix.neighbors(u), nbs);
                    assert!(nbs.iter().tuple_windows().all(|(a, b)| a < b));
                }

                assert_eq!(matrix.edges().collect_vec(), list.edges().collect_vec());
            }
        }
    }
}
