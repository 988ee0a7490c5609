/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.

Nodes are numbered `1` to `n`. Index `0` is reserved: every per-vertex array in this crate has
length `n + 1` and never stores information for slot `0`. This keeps vertex ids identical to the
ids used in input files.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes are unsigned integers in the range `1..=n`
pub type Node = u32;

/// The reserved slot at the front of every per-vertex array
pub const RESERVED_NODE: Node = 0;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Edge weights of a [`WeightedGraph`](crate::weighted::WeightedGraph)
pub type Weight = f64;

/// Returns the range of valid vertices of a graph with `n` nodes
#[inline]
pub fn node_range(n: NumNodes) -> std::ops::RangeInclusive<Node> {
    1..=n
}
