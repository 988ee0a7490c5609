/*!
Breadth-first and depth-first search producing spanning trees.

Both searches return a [`TraversalTree`]: dense `levels` and `parents` arrays of length `n + 1`,
`None` at slot `0` and at every vertex that was not reached. The root has level `0` and is
its own parent; [`reconstruct_path`] relies on this self-loop to find the root.

Neighbors are always explored in ascending order, making the resulting trees reproducible and
independent of the representation.
*/

use std::collections::VecDeque;

use super::*;

/// Spanning tree of a single BFS/DFS run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalTree {
    root: Node,
    levels: Vec<Option<NumNodes>>,
    parents: Vec<Option<Node>>,
}

impl TraversalTree {
    /// Creates a tree over `1..=n` in which no vertex has been visited yet
    fn unvisited(n: NumNodes, root: Node) -> Self {
        Self {
            root,
            levels: vec![None; n as usize + 1],
            parents: vec![None; n as usize + 1],
        }
    }

    /// Returns the start vertex of the search
    pub fn root(&self) -> Node {
        self.root
    }

    /// Returns the level (depth in the tree) of `v` or `None` if `v` was not reached.
    /// For BFS trees this is the distance from the root.
    /// ** Panics if `v > n` **
    pub fn level(&self, v: Node) -> Option<NumNodes> {
        self.levels[v as usize]
    }

    /// Returns the parent of `v` or `None` if `v` was not reached. The root is its own parent.
    /// ** Panics if `v > n` **
    pub fn parent(&self, v: Node) -> Option<Node> {
        self.parents[v as usize]
    }

    /// Returns *true* if `v` was reached
    pub fn is_reached(&self, v: Node) -> bool {
        self.level(v).is_some()
    }

    /// Levels indexed by vertex, `None` at slot `0` and for unreached vertices
    pub fn levels(&self) -> &[Option<NumNodes>] {
        &self.levels
    }

    /// Parents indexed by vertex, `None` at slot `0` and for unreached vertices
    pub fn parents(&self) -> &[Option<Node>] {
        &self.parents
    }

    /// Consumes the tree and returns `(levels, parents)`
    pub fn into_parts(self) -> (Vec<Option<NumNodes>>, Vec<Option<Node>>) {
        (self.levels, self.parents)
    }

    /// Returns an iterator over all reached vertices in ascending order
    pub fn reached(&self) -> impl Iterator<Item = Node> + '_ {
        self.levels
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(v, l)| l.map(|_| v as Node))
    }

    /// Returns the number of reached vertices
    pub fn number_reached(&self) -> NumNodes {
        self.reached().count() as NumNodes
    }

    /// Returns the maximum level if every vertex was reached and `None` otherwise.
    /// For BFS trees this is the eccentricity of the root.
    pub fn max_level(&self) -> Option<NumNodes> {
        self.levels
            .iter()
            .skip(1)
            .try_fold(0, |max, level| level.map(|l| max.max(l)))
    }

    /// Returns the tree path from the root to `v`, see [`reconstruct_path`]
    pub fn path_to(&self, v: Node) -> GraphResult<Vec<Node>> {
        reconstruct_path(&self.parents, v)
    }
}

/// Provides breadth-first and depth-first search as methods on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Runs a breadth-first search from `s`. Neighbors are explored in ascending order and the
    /// first discoverer of a vertex becomes its parent.
    ///
    /// `O(n + m)` on [`AdjList`](crate::repr::AdjList), `O(n^2)` on
    /// [`AdjMatrix`](crate::repr::AdjMatrix).
    ///
    /// ** Panics if `s` is not in `1..=n` **
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(4, [(1, 2), (2, 3), (3, 4)], Representation::Matrix).unwrap();
    ///
    /// let tree = g.bfs(1);
    /// assert_eq!(tree.levels(), &[None, Some(0), Some(1), Some(2), Some(3)]);
    /// assert_eq!(tree.parents(), &[None, Some(1), Some(1), Some(2), Some(3)]);
    /// ```
    fn bfs(&self, s: Node) -> TraversalTree {
        self.assert_vertex(s);

        let mut tree = TraversalTree::unvisited(self.number_of_nodes(), s);
        tree.levels[s as usize] = Some(0);
        tree.parents[s as usize] = Some(s);

        let mut queue = VecDeque::from([s]);
        while let Some(u) = queue.pop_front() {
            let next_level = tree.levels[u as usize].map(|l| l + 1);
            for v in self.neighbors_of(u) {
                if tree.levels[v as usize].is_none() {
                    tree.levels[v as usize] = next_level;
                    tree.parents[v as usize] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        tree
    }

    /// Runs a breadth-first search from `s` that only marks vertices: every reached vertex `v`
    /// gets `visited[v] = Some(marker)`.
    ///
    /// `visited` is owned by the caller and is not reset, so it can be shared across several
    /// calls with increasing markers. No entry may equal `Some(marker)` before the call.
    ///
    /// ** Panics if `s` is not in `1..=n` or `visited.len() != n + 1` **
    fn bfs_visited(&self, s: Node, visited: &mut [Option<NumNodes>], marker: NumNodes) {
        self.assert_vertex(s);
        assert_eq!(visited.len(), self.len() + 1);

        let mut queue = VecDeque::from([s]);
        visited[s as usize] = Some(marker);
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors_of(u) {
                if visited[v as usize] != Some(marker) {
                    visited[v as usize] = Some(marker);
                    queue.push_back(v);
                }
            }
        }
    }

    /// Runs an iterative depth-first search from `s`.
    ///
    /// The explicit stack holds `(vertex, inserter)` pairs. Neighbors are pushed in descending
    /// order so that they are discovered in ascending order, exactly as a recursive DFS would.
    /// A vertex is finalized the first time it is popped; later (stale) entries are discarded.
    ///
    /// `O(n + m)` on [`AdjList`](crate::repr::AdjList), `O(n^2)` on
    /// [`AdjMatrix`](crate::repr::AdjMatrix).
    ///
    /// ** Panics if `s` is not in `1..=n` **
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// //   2 - 4
    /// //  /
    /// // 1 - 3
    /// let g = Graph::from_edges(4, [(1, 2), (1, 3), (2, 4)], Representation::List).unwrap();
    ///
    /// let tree = g.dfs(1);
    /// assert_eq!(tree.levels(), &[None, Some(0), Some(1), Some(1), Some(2)]);
    /// assert_eq!(tree.parent(4), Some(2));
    /// ```
    fn dfs(&self, s: Node) -> TraversalTree {
        self.assert_vertex(s);

        let mut tree = TraversalTree::unvisited(self.number_of_nodes(), s);
        let mut stack: Vec<(Node, Node)> = vec![(s, s)];
        let mut buffer: Vec<Node> = Vec::new();

        while let Some((u, inserter)) = stack.pop() {
            if tree.levels[u as usize].is_some() {
                continue;
            }

            // the root is pushed by itself while still unvisited, hence level 0
            tree.levels[u as usize] = Some(tree.levels[inserter as usize].map_or(0, |l| l + 1));
            tree.parents[u as usize] = Some(inserter);

            buffer.clear();
            buffer.extend(self.neighbors_of(u));
            stack.extend(
                buffer
                    .iter()
                    .rev()
                    .filter(|&&v| tree.levels[v as usize].is_none())
                    .map(|&v| (v, u)),
            );
        }

        tree
    }

    /// Returns the number of edges on a shortest path between `u` and `v` or `None` if they are
    /// not connected. Runs a full BFS per call.
    ///
    /// ** Panics if `u` or `v` is not in `1..=n` **
    fn dist(&self, u: Node, v: Node) -> Option<NumNodes> {
        self.assert_vertex(v);
        self.bfs(u).level(v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repr::*, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn both(n: NumNodes, edges: &[Edge]) -> [Graph; 2] {
        [Representation::Matrix, Representation::List]
            .map(|r| Graph::from_edges(n, edges.iter(), r).unwrap())
    }

    /// Reference implementation: recursive DFS visiting neighbors in ascending order
    fn recursive_dfs<G: AdjacencyList>(
        graph: &G,
        u: Node,
        parent: Node,
        level: NumNodes,
        tree: &mut (Vec<Option<NumNodes>>, Vec<Option<Node>>),
    ) {
        tree.0[u as usize] = Some(level);
        tree.1[u as usize] = Some(parent);
        for v in graph.neighbors(u) {
            if tree.0[v as usize].is_none() {
                recursive_dfs(graph, v, u, level + 1, tree);
            }
        }
    }

    #[test]
    fn bfs_path() {
        for graph in both(4, &path_edges(4)) {
            let tree = graph.bfs(1);
            assert_eq!(tree.root(), 1);
            assert_eq!(tree.levels(), &[None, Some(0), Some(1), Some(2), Some(3)]);
            assert_eq!(tree.parents(), &[None, Some(1), Some(1), Some(2), Some(3)]);
            assert_eq!(tree.max_level(), Some(3));
            assert_eq!(tree.path_to(4).unwrap(), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn bfs_first_discoverer_wins() {
        //    2
        //  /   \
        // 1     4
        //  \   /
        //    3
        for graph in both(4, &[Edge(1, 2), Edge(1, 3), Edge(2, 4), Edge(3, 4)]) {
            let tree = graph.bfs(1);
            assert_eq!(tree.parent(4), Some(2));
            assert_eq!(tree.level(4), Some(2));
        }
    }

    #[test]
    fn bfs_unreached() {
        for graph in both(4, &[Edge(1, 2), Edge(3, 4)]) {
            let tree = graph.bfs(1);
            assert_eq!(tree.reached().collect_vec(), vec![1, 2]);
            assert_eq!(tree.number_reached(), 2);
            assert_eq!(tree.level(3), None);
            assert_eq!(tree.parent(4), None);
            assert_eq!(tree.max_level(), None);
            assert!(tree.path_to(3).is_err());
        }
    }

    #[test]
    fn bfs_levels_are_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [10 as NumNodes, 30, 80] {
            for m_ub in [n, n * 2, n * 6] {
                let edges = random_edges(rng, n, m_ub as NumEdges);
                let [matrix, list] = both(n, &edges);

                for s in 1..=n {
                    let tree = list.bfs(s);
                    assert_eq!(tree, matrix.bfs(s));
                    assert_eq!(tree, list.bfs(s));

                    for &Edge(u, v) in &edges {
                        match (tree.level(u), tree.level(v)) {
                            (Some(a), Some(b)) => assert!(a.abs_diff(b) <= 1),
                            (None, None) => {}
                            _ => panic!("edge {u}-{v} crosses the reached set"),
                        }
                    }

                    for v in tree.reached() {
                        let path = tree.path_to(v).unwrap();
                        assert_eq!(path[0], s);
                        assert_eq!(*path.last().unwrap(), v);
                        assert_eq!(path.len() as NumNodes, tree.level(v).unwrap() + 1);
                        assert!(path.iter().tuple_windows().all(|(&a, &b)| list.has_edge(a, b)));
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_visited_markers() {
        for graph in both(5, &[Edge(1, 2), Edge(3, 4)]) {
            let mut visited = vec![None; 6];
            graph.bfs_visited(1, &mut visited, 0);
            graph.bfs_visited(3, &mut visited, 1);
            graph.bfs_visited(5, &mut visited, 2);
            assert_eq!(
                visited,
                vec![None, Some(0), Some(0), Some(1), Some(1), Some(2)]
            );
        }
    }

    #[test]
    fn dfs_ascending_discovery() {
        //  / 2
        // 1         4 - 3
        //  \ 5 - 6 /
        let edges = [Edge(1, 2), Edge(1, 5), Edge(3, 4), Edge(5, 6), Edge(4, 6)];
        for graph in both(6, &edges) {
            let tree = graph.dfs(1);
            assert_eq!(
                tree.parents(),
                &[None, Some(1), Some(1), Some(4), Some(6), Some(1), Some(5)]
            );
            assert_eq!(
                tree.levels(),
                &[None, Some(0), Some(1), Some(4), Some(3), Some(1), Some(2)]
            );
        }
    }

    #[test]
    fn dfs_matches_recursive() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [10 as NumNodes, 30, 80] {
            for m_ub in [n, n * 2, n * 6] {
                let edges = random_edges(rng, n, m_ub as NumEdges);
                let [matrix, list] = both(n, &edges);

                for s in 1..=n {
                    let mut expected = (vec![None; n as usize + 1], vec![None; n as usize + 1]);
                    recursive_dfs(&list, s, s, 0, &mut expected);

                    let tree = list.dfs(s);
                    assert_eq!(tree, matrix.dfs(s));
                    assert_eq!(tree.clone().into_parts(), expected);
                    assert_eq!(tree.reached().collect_vec(), list.bfs(s).reached().collect_vec());
                }
            }
        }
    }

    #[test]
    fn dfs_long_path_does_not_recurse() {
        let n = 200_000;
        let graph = Graph::from_edges(n, path_edges(n), Representation::List).unwrap();
        let tree = graph.dfs(1);
        assert_eq!(tree.level(n), Some(n - 1));
    }

    #[test]
    fn dist() {
        for graph in both(5, &[Edge(1, 2), Edge(2, 3), Edge(3, 4)]) {
            assert_eq!(graph.dist(1, 4), Some(3));
            assert_eq!(graph.dist(4, 1), Some(3));
            assert_eq!(graph.dist(2, 2), Some(0));
            assert_eq!(graph.dist(1, 5), None);
        }
    }

    #[test]
    #[should_panic]
    fn bfs_source_out_of_range() {
        let graph = Graph::from_edges(3, path_edges(3), Representation::List).unwrap();
        graph.bfs(4);
    }

    #[test]
    #[should_panic]
    fn dfs_source_zero() {
        let graph = Graph::from_edges(3, path_edges(3), Representation::Matrix).unwrap();
        graph.dfs(0);
    }
}
