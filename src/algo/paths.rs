use super::*;

/// Walks `parents` from `u` back to the self-parenting root and returns the vertices from the
/// root to `u` (both inclusive).
///
/// `parents` is a parent array as produced by [`Traversal::bfs`], [`Traversal::dfs`] or
/// [`ShortestPath::dijkstra`], i.e. of length `n + 1` with the root being its own parent.
///
/// # Errors
/// - [`GraphError::VertexOutOfRange`] if `u` is not in `1..=n`,
/// - [`GraphError::MissingRoot`] if the walk hits an unvisited vertex or does not terminate
///   within `n` steps, i.e. `u` was not reached by the search that produced `parents`.
///
/// # Examples
/// ```
/// use graphprops::{prelude::*, algo::*};
///
/// let graph = Graph::from_edges(3, [(1, 2), (2, 3)], Representation::List).unwrap();
/// let tree = graph.bfs(1);
/// assert_eq!(reconstruct_path(tree.parents(), 3).unwrap(), vec![1, 2, 3]);
/// ```
pub fn reconstruct_path(parents: &[Option<Node>], u: Node) -> GraphResult<Vec<Node>> {
    let n = parents.len().saturating_sub(1);
    if u == RESERVED_NODE || u as usize > n {
        return Err(GraphError::VertexOutOfRange {
            vertex: u as i64,
            n: n as NumNodes,
        });
    }

    let mut path = vec![u];
    let mut current = u;
    loop {
        match parents[current as usize] {
            Some(p) if p == current => break,
            Some(p) if path.len() <= n && (p as usize) <= n => {
                path.push(p);
                current = p;
            }
            _ => return Err(GraphError::MissingRoot(u)),
        }
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_to_root() {
        let parents = vec![None, Some(1), Some(1), Some(2), Some(3)];
        assert_eq!(reconstruct_path(&parents, 4).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(reconstruct_path(&parents, 1).unwrap(), vec![1]);
    }

    #[test]
    fn unreached_vertex() {
        let parents = vec![None, Some(1), Some(1), None];
        assert!(matches!(
            reconstruct_path(&parents, 3),
            Err(GraphError::MissingRoot(3))
        ));
    }

    #[test]
    fn out_of_range() {
        let parents = vec![None, Some(1)];
        assert!(matches!(
            reconstruct_path(&parents, 0),
            Err(GraphError::VertexOutOfRange { vertex: 0, n: 1 })
        ));
        assert!(matches!(
            reconstruct_path(&parents, 2),
            Err(GraphError::VertexOutOfRange { vertex: 2, n: 1 })
        ));
    }

    #[test]
    fn cycle_without_root() {
        let parents = vec![None, Some(2), Some(3), Some(1)];
        assert!(matches!(
            reconstruct_path(&parents, 1),
            Err(GraphError::MissingRoot(1))
        ));
    }
}
