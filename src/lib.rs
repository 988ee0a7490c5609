/*!
`graphprops` computes structural properties of large, simple, undirected graphs:
- connectivity (connected components and their sizes),
- unweighted distances, breadth-first and depth-first spanning trees,
- exact and approximate (double sweep) diameter,
- weighted shortest paths via two variants of Dijkstra's algorithm,
- degree statistics.

# Representation

Vertices are `u32` in the range `1..=n`; slot `0` of every per-vertex array is reserved and
never used. Edges are unordered pairs, the graph is assumed simple (no loops, no parallel edges)
and immutable after construction.

Storage is pluggable, see [`repr`]:
- [`AdjMatrix`](crate::repr::AdjMatrix) for dense graphs,
- [`AdjList`](crate::repr::AdjList) for sparse graphs.

Both yield neighbors in strictly ascending order. The backend is chosen once through
[`Representation`](crate::repr::Representation) when a [`Graph`] or [`WeightedGraph`] is built.

# Usage

Algorithms are provided as traits implemented on every graph, so
`use graphprops::{prelude::*, algo::*};` suffices:

```
use graphprops::{prelude::*, algo::*};

let graph = Graph::from_edges(4, [(1, 2), (2, 3), (3, 4)], Representation::List).unwrap();

let tree = graph.bfs(1);
assert_eq!(tree.level(4), Some(3));
assert_eq!(graph.diameter(), Some(3));
assert_eq!(graph.connected_components(), vec![vec![1, 2, 3, 4]]);
```

Reading the plain text format (vertex count followed by `u v` or `u v w` records) is handled by
[`io`].
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod weighted;

pub use edge::*;
pub use error::*;
pub use graph::Graph;
pub use node::*;
pub use weighted::WeightedGraph;

/// `graphprops::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits, both representations and both graph types.
pub mod prelude {
    pub use super::{
        edge::*, error::*, graph::Graph, node::*, ops::*, repr::*, weighted::WeightedGraph,
    };
}
