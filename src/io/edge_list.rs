//! # EdgeList
//!
//! The EdgeList-Format consists of the number of vertices `n`, followed by `u v` records
//! representing the undirected edge `Edge(u, v)`. The weighted variant uses `u v w` records.

use std::{
    io::{BufRead, Lines},
    path::Path,
};

use tracing::warn;

use super::*;

/// Streams whitespace separated tokens line by line; line breaks carry no meaning
struct Tokens<R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Current line
    line: String,
    /// Position of the next unread byte in `line`
    pos: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: String::new(),
            pos: 0,
        }
    }

    /// Returns the next token or `None` at the end of the input
    fn next(&mut self) -> GraphResult<Option<&str>> {
        loop {
            let rest = &self.line[self.pos..];
            let start = self.pos + (rest.len() - rest.trim_ascii_start().len());
            if start < self.line.len() {
                let end = self.line[start..]
                    .find(|c: char| c.is_ascii_whitespace())
                    .map_or(self.line.len(), |len| start + len);
                self.pos = end;
                return Ok(Some(&self.line[start..end]));
            }

            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    self.line = line?;
                    self.pos = 0;
                }
            }
        }
    }

    /// Parses the vertex count, the first token of the input
    fn read_vertex_count(&mut self) -> GraphResult<NumNodes> {
        let n: i64 = parse_next_value!(self, "number of vertices");
        if n < 1 {
            return Err(GraphError::InvalidVertexCount(n));
        }
        NumNodes::try_from(n).map_err(|_| parse_error!("Too many vertices: {n}"))
    }

    /// Parses the first endpoint of the next record or returns `None` at the end of the input
    fn read_record_start(&mut self) -> GraphResult<Option<Node>> {
        match self.next()? {
            None => Ok(None),
            Some(u) => u
                .parse()
                .map(Some)
                .map_err(|_| parse_error!("Invalid value {u:?} found. Cannot parse edge.")),
        }
    }
}

/// A GraphReader for the unweighted EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// Backend of the graphs read
    representation: Representation,
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the representation of the graphs read
    pub fn representation(mut self, representation: Representation) -> EdgeListReader {
        self.representation = representation;
        self
    }

    /// Reads the vertex count and all edges without building a graph
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> GraphResult<(NumNodes, Vec<Edge>)> {
        let mut tokens = Tokens::new(reader);
        let n = tokens.read_vertex_count()?;

        let mut edges = Vec::new();
        while let Some(u) = tokens.read_record_start()? {
            let v: Node = parse_next_value!(tokens, "edge");
            edges.push(Edge(u, v));
        }

        Ok((n, edges))
    }
}

impl GraphReader<Graph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> GraphResult<Graph> {
        let (n, edges) = self.try_read_edges(reader)?;
        Graph::from_edges(n, edges, self.representation)
    }
}

/// A GraphReader for the weighted EdgeList-Format.
///
/// Negative weights are accepted (only Dijkstra rejects them) but reported via `tracing::warn!`.
#[derive(Debug, Clone, Default)]
pub struct WeightedEdgeListReader {
    /// Backend of the graphs read
    representation: Representation,
}

impl WeightedEdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the representation of the graphs read
    pub fn representation(mut self, representation: Representation) -> WeightedEdgeListReader {
        self.representation = representation;
        self
    }

    /// Reads the vertex count and all weighted edges without building a graph
    pub fn try_read_edges<R: BufRead>(
        &self,
        reader: R,
    ) -> GraphResult<(NumNodes, Vec<WeightedEdge>)> {
        let mut tokens = Tokens::new(reader);
        let n = tokens.read_vertex_count()?;

        let mut edges = Vec::new();
        while let Some(u) = tokens.read_record_start()? {
            let v: Node = parse_next_value!(tokens, "edge");
            let w: Weight = parse_next_value!(tokens, "weight");
            edges.push(WeightedEdge(u, v, w));
        }

        Ok((n, edges))
    }
}

impl GraphReader<WeightedGraph> for WeightedEdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> GraphResult<WeightedGraph> {
        let (n, edges) = self.try_read_edges(reader)?;
        let graph = WeightedGraph::from_edges(n, edges, self.representation)?;

        if let Some(WeightedEdge(u, v, weight)) = graph.first_invalid_weight() {
            warn!(u, v, weight, "graph has invalid edge weights, dijkstra will reject it");
        }
        Ok(graph)
    }
}

impl Graph {
    /// Reads a graph in the EdgeList-Format, see [`EdgeListReader`]
    pub fn try_read<R: BufRead>(reader: R, representation: Representation) -> GraphResult<Self> {
        EdgeListReader::new()
            .representation(representation)
            .try_read_graph(reader)
    }

    /// Reads a graph in the EdgeList-Format from a file, see [`EdgeListReader`]
    pub fn try_read_file<P: AsRef<Path>>(
        path: P,
        representation: Representation,
    ) -> GraphResult<Self> {
        EdgeListReader::new()
            .representation(representation)
            .try_read_graph_file(path)
    }
}

impl WeightedGraph {
    /// Reads a graph in the weighted EdgeList-Format, see [`WeightedEdgeListReader`]
    pub fn try_read<R: BufRead>(reader: R, representation: Representation) -> GraphResult<Self> {
        WeightedEdgeListReader::new()
            .representation(representation)
            .try_read_graph(reader)
    }

    /// Reads a graph in the weighted EdgeList-Format from a file, see [`WeightedEdgeListReader`]
    pub fn try_read_file<P: AsRef<Path>>(
        path: P,
        representation: Representation,
    ) -> GraphResult<Self> {
        WeightedEdgeListReader::new()
            .representation(representation)
            .try_read_graph_file(path)
    }
}
