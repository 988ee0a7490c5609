//! # Reports
//!
//! Plain text reports of computed results. Every per-vertex report prints one line for each
//! vertex `1..=n`; unvisited vertices print `-1` as parent and level, unreached vertices of a
//! shortest-path tree print `inf` as distance.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::*;
use crate::algo::{GraphSummary, ShortestPaths, TraversalTree};

/// Trait for results that can be written as a textual report
pub trait ReportWrite {
    /// Writes the report to the provided writer and flushes it.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_report<W: Write>(&self, writer: W) -> GraphResult<()>;

    /// Writes the report to a file, creating or truncating it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_report_file<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        self.try_write_report(BufWriter::new(File::create(path)?))
    }
}

impl ReportWrite for GraphSummary {
    fn try_write_report<W: Write>(&self, mut writer: W) -> GraphResult<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
}

/// `-1` for `None`, as in the textual formats of traversal results
fn or_minus_one(value: Option<Node>) -> i64 {
    value.map_or(-1, |x| x as i64)
}

impl ReportWrite for TraversalTree {
    fn try_write_report<W: Write>(&self, mut writer: W) -> GraphResult<()> {
        writeln!(writer, "Level -1 means not discovered.")?;
        writeln!(
            writer,
            "Level 0 with a vertex as its own parent marks the root of the spanning tree."
        )?;
        writeln!(writer)?;
        for v in node_range(self.levels().len() as NumNodes - 1) {
            writeln!(
                writer,
                "Vertex {v}: parent {}, level {}",
                or_minus_one(self.parent(v)),
                or_minus_one(self.level(v))
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ReportWrite for ShortestPaths {
    fn try_write_report<W: Write>(&self, mut writer: W) -> GraphResult<()> {
        writeln!(writer, "Shortest paths from vertex {}", self.source())?;
        writeln!(writer)?;
        for v in node_range(self.dists().len() as NumNodes - 1) {
            writeln!(
                writer,
                "Vertex {v}: parent {}, distance {}",
                or_minus_one(self.parent(v)),
                self.dist(v)
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    fn report<T: ReportWrite>(result: &T) -> String {
        let mut buffer = Vec::new();
        result.try_write_report(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn traversal_report() {
        let graph = Graph::from_edges(4, [(1, 2), (2, 3)], Representation::List).unwrap();
        let text = report(&graph.bfs(2));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Level -1 means not discovered.",
                "Level 0 with a vertex as its own parent marks the root of the spanning tree.",
                "",
                "Vertex 1: parent 2, level 1",
                "Vertex 2: parent 2, level 0",
                "Vertex 3: parent 2, level 1",
                "Vertex 4: parent -1, level -1",
            ]
        );
    }

    #[test]
    fn shortest_paths_report() {
        let graph =
            WeightedGraph::from_edges(3, [(1, 2, 0.5)], Representation::Matrix).unwrap();
        let paths = graph.dijkstra(1, DijkstraStrategy::Vector).unwrap();
        assert_eq!(
            report(&paths),
            "Shortest paths from vertex 1\n\n\
             Vertex 1: parent 1, distance 0\n\
             Vertex 2: parent 1, distance 0.5\n\
             Vertex 3: parent -1, distance inf\n"
        );
    }

    #[test]
    fn summary_report() {
        let graph = Graph::from_edges(2, [(1, 2)], Representation::List).unwrap();
        let summary = graph.summary();
        assert_eq!(report(&summary), summary.to_string());
        assert!(report(&summary).ends_with("Component 0: size 2; members: 1 2\n"));
    }
}
