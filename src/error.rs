//! Error types for graph construction, input parsing and shortest-path queries.
//!
//! Expected absence (an unreachable vertex, a disconnected graph) is never an error:
//! those are reported through `Option` or `f64::INFINITY` in the regular return values.

use thiserror::Error;

use crate::{Node, NumNodes, Weight};

/// Result type alias for fallible graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Contract violations detected at construction or query time.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("Invalid vertex count {0}: a graph needs at least one vertex")]
    InvalidVertexCount(i64),

    /// A vertex id outside of `1..=n`.
    #[error("Vertex {vertex} out of range 1..={n}")]
    VertexOutOfRange { vertex: i64, n: NumNodes },

    /// Dijkstra requires non-negative weights.
    #[error("Edge ({u},{v}) has weight {weight}; Dijkstra requires non-negative weights")]
    NegativeWeight { u: Node, v: Node, weight: Weight },

    /// Walking the parent array never reached a self-parenting root.
    #[error("No self-parenting root found while reconstructing the path to vertex {0}")]
    MissingRoot(Node),

    /// Malformed textual input.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The input stream could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
