/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graphprops::algo::*;
```
and gain access to traversal, connectivity, diameter, degree statistics and shortest paths.

Every algorithm is a trait with a blanket implementation, hence available on [`Graph`],
[`WeightedGraph`] and on the bare representations alike. All of them are read-only and
allocate their result arrays freshly per call.
*/

mod connectivity;
mod diameter;
mod paths;
mod shortest_path;
mod stats;
mod traversal;

use crate::{ops::*, *};

pub use connectivity::*;
pub use diameter::*;
pub use paths::*;
pub use shortest_path::*;
pub use stats::*;
pub use traversal::*;
