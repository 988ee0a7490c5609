/*!
Single-source shortest paths on graphs with non-negative edge weights.

Two variants of Dijkstra's algorithm are provided, selected per call via [`DijkstraStrategy`]:
- [`DijkstraStrategy::Heap`] uses a binary heap with lazy deletion in `O((n + m) log m)`,
- [`DijkstraStrategy::Vector`] scans all vertices for the closest unexplored one in `O(n^2)`.

Both compute identical distances. On ties between equally short paths they may choose
different parents, so the resulting shortest-path trees can differ.
*/

use std::{cmp::Ordering, collections::BinaryHeap, fmt::Display, str::FromStr};

use stream_bitset::prelude::*;
use tracing::debug;

use super::*;

/// Selects the variant of Dijkstra's algorithm
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum DijkstraStrategy {
    /// Binary heap with lazy deletion
    #[default]
    Heap,
    /// Linear scan over a plain distance vector
    Vector,
}

impl DijkstraStrategy {
    /// Maps the classic `use_vector_only` switch onto a strategy
    pub fn from_use_vector_only(use_vector_only: bool) -> Self {
        if use_vector_only { Self::Vector } else { Self::Heap }
    }
}

impl FromStr for DijkstraStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        match s.to_lowercase().as_str() {
            "heap" => Ok(Self::Heap),
            "vector" => Ok(Self::Vector),
            _ => Err(GraphError::Parse(format!("Unknown DijkstraStrategy: {s}"))),
        }
    }
}

impl Display for DijkstraStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heap => write!(f, "heap"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

/// Shortest-path tree of a single Dijkstra run.
///
/// `dists[v]` is `f64::INFINITY` for unreached vertices and for slot `0`; `parents` follows the
/// same conventions as [`TraversalTree::parents`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: Node,
    dists: Vec<Weight>,
    parents: Vec<Option<Node>>,
}

impl ShortestPaths {
    fn unreached(n: NumNodes, source: Node) -> Self {
        let mut paths = Self {
            source,
            dists: vec![Weight::INFINITY; n as usize + 1],
            parents: vec![None; n as usize + 1],
        };
        paths.dists[source as usize] = 0.0;
        paths
    }

    /// Returns the source vertex
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the length of a shortest path from the source to `v`,
    /// `f64::INFINITY` if none exists.
    /// ** Panics if `v > n` **
    pub fn dist(&self, v: Node) -> Weight {
        self.dists[v as usize]
    }

    /// Returns the predecessor of `v` on a shortest path. The source is its own parent.
    /// ** Panics if `v > n` **
    pub fn parent(&self, v: Node) -> Option<Node> {
        self.parents[v as usize]
    }

    /// Returns *true* if `v` is reachable from the source
    pub fn is_reached(&self, v: Node) -> bool {
        self.parent(v).is_some()
    }

    pub fn dists(&self) -> &[Weight] {
        &self.dists
    }

    pub fn parents(&self) -> &[Option<Node>] {
        &self.parents
    }

    /// Consumes the result and returns `(dists, parents)`
    pub fn into_parts(self) -> (Vec<Weight>, Vec<Option<Node>>) {
        (self.dists, self.parents)
    }

    /// Returns a shortest path from the source to `v`, see [`reconstruct_path`]
    pub fn path_to(&self, v: Node) -> GraphResult<Vec<Node>> {
        reconstruct_path(&self.parents, v)
    }
}

/// Entry of the priority queue: a tentative distance of `node`, found via `discoverer`.
///
/// `Ord` is reversed so that `BinaryHeap` pops the smallest `(dist, node, discoverer)` first.
#[derive(Debug, Copy, Clone)]
struct HeapEntry {
    dist: Weight,
    node: Node,
    discoverer: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.discoverer.cmp(&self.discoverer))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Dijkstra's algorithm for every graph with weighted adjacencies
pub trait ShortestPath: WeightedAdjacencyList {
    /// Computes shortest paths from `s` to all vertices.
    ///
    /// All weights are checked before the search starts.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if `s` is not in `1..=n`,
    /// - [`GraphError::NegativeWeight`] if any edge weight is negative (or NaN).
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::from_edges(
    ///     3,
    ///     [(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)],
    ///     Representation::List,
    /// )
    /// .unwrap();
    ///
    /// let paths = g.dijkstra(1, DijkstraStrategy::Heap).unwrap();
    /// assert_eq!(&paths.dists()[1..], &[0.0, 1.0, 2.0]);
    /// assert_eq!(paths.parent(3), Some(2));
    /// ```
    fn dijkstra(&self, s: Node, strategy: DijkstraStrategy) -> GraphResult<ShortestPaths> {
        if !self.contains_vertex(s) {
            return Err(GraphError::VertexOutOfRange {
                vertex: s as i64,
                n: self.number_of_nodes(),
            });
        }

        if let Some(WeightedEdge(u, v, weight)) = self
            .weighted_edges()
            .find(|e| !(e.weight() >= 0.0))
        {
            return Err(GraphError::NegativeWeight { u, v, weight });
        }

        debug!(source = s, %strategy, "running dijkstra");
        Ok(match strategy {
            DijkstraStrategy::Heap => dijkstra_heap(self, s),
            DijkstraStrategy::Vector => dijkstra_vector(self, s),
        })
    }

    /// Returns the length of a shortest path between `u` and `v` (heap variant),
    /// `f64::INFINITY` if they are not connected.
    ///
    /// # Errors
    /// See [`ShortestPath::dijkstra`]; additionally fails if `v` is not in `1..=n`.
    fn dist_weighted(&self, u: Node, v: Node) -> GraphResult<Weight> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexOutOfRange {
                vertex: v as i64,
                n: self.number_of_nodes(),
            });
        }
        Ok(self.dijkstra(u, DijkstraStrategy::Heap)?.dist(v))
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacencyList {}

/// Heap variant with lazy deletion; weights must already be validated
fn dijkstra_heap<G: WeightedAdjacencyList>(graph: &G, s: Node) -> ShortestPaths {
    let n = graph.number_of_nodes();
    let mut paths = ShortestPaths::unreached(n, s);
    let mut finalized = NodeBitSet::new(n + 1);

    let mut heap = BinaryHeap::from([HeapEntry {
        dist: 0.0,
        node: s,
        discoverer: s,
    }]);

    while let Some(HeapEntry {
        dist,
        node: u,
        discoverer,
    }) = heap.pop()
    {
        // stale entry of an already finalized vertex
        if finalized.set_bit(u) {
            continue;
        }
        paths.parents[u as usize] = Some(discoverer);

        for WeightedNeighbor { node: v, weight } in graph.weighted_neighbors_of(u) {
            if finalized.get_bit(v) {
                continue;
            }

            let candidate = dist + weight;
            if paths.dists[v as usize] >= candidate {
                paths.dists[v as usize] = candidate;
                heap.push(HeapEntry {
                    dist: candidate,
                    node: v,
                    discoverer: u,
                });
            }
        }
    }

    paths
}

/// Linear-scan variant; weights must already be validated
fn dijkstra_vector<G: WeightedAdjacencyList>(graph: &G, s: Node) -> ShortestPaths {
    let n = graph.number_of_nodes();
    let mut paths = ShortestPaths::unreached(n, s);
    paths.parents[s as usize] = Some(s);
    let mut explored = NodeBitSet::new(n + 1);

    loop {
        // closest unexplored vertex with finite distance, lowest index on ties
        let mut closest: Option<(Node, Weight)> = None;
        for v in graph.vertices() {
            let dist = paths.dists[v as usize];
            if !explored.get_bit(v)
                && dist.is_finite()
                && closest.is_none_or(|(_, best)| dist < best)
            {
                closest = Some((v, dist));
            }
        }

        let Some((u, dist)) = closest else {
            break;
        };
        explored.set_bit(u);

        for WeightedNeighbor { node: v, weight } in graph.weighted_neighbors_of(u) {
            if explored.get_bit(v) {
                continue;
            }

            let candidate = dist + weight;
            if paths.dists[v as usize] >= candidate {
                paths.dists[v as usize] = candidate;
                paths.parents[v as usize] = Some(u);
            }
        }
    }

    paths
}
