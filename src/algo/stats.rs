use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// Minimum, maximum, mean and median over the degrees of all vertices
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DegreeStatistics {
    pub min: NumNodes,
    pub max: NumNodes,
    pub mean: f64,
    /// For an even number of vertices the mean of the two central degrees
    pub median: f64,
}

impl DegreeStatistics {
    /// Computes the statistics of a non-empty degree sequence in `O(n log n)`.
    /// Returns `None` for an empty sequence.
    pub fn from_degrees(degrees: impl IntoIterator<Item = NumNodes>) -> Option<Self> {
        let degrees = degrees.into_iter().sorted_unstable().collect_vec();
        let len = degrees.len();
        let (&min, &max) = (degrees.first()?, degrees.last()?);

        let sum: u64 = degrees.iter().map(|&d| d as u64).sum();
        let median = if len % 2 == 1 {
            degrees[len / 2] as f64
        } else {
            (degrees[len / 2 - 1] as f64 + degrees[len / 2] as f64) / 2.0
        };

        Some(Self {
            min,
            max,
            mean: sum as f64 / len as f64,
            median,
        })
    }
}

/// Aggregated properties of a graph: size, degree statistics and the full component listing.
///
/// `Display` renders the textual report:
/// ```text
/// Vertices: 4
/// Edges: 2
/// Minimum degree: 1
/// Maximum degree: 1
/// Mean degree: 1
/// Median degree: 1
///
/// Connected components: 2
/// Component 0: size 2; members: 1 2
/// Component 1: size 2; members: 3 4
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    pub vertices: NumNodes,
    pub edges: NumEdges,
    pub degrees: DegreeStatistics,
    /// Sorted by descending size, see [`Connectivity::connected_components`]
    pub components: Vec<Vec<Node>>,
}

impl Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vertices: {}", self.vertices)?;
        writeln!(f, "Edges: {}", self.edges)?;
        writeln!(f, "Minimum degree: {}", self.degrees.min)?;
        writeln!(f, "Maximum degree: {}", self.degrees.max)?;
        writeln!(f, "Mean degree: {}", self.degrees.mean)?;
        writeln!(f, "Median degree: {}", self.degrees.median)?;
        writeln!(f)?;
        writeln!(f, "Connected components: {}", self.components.len())?;
        for (i, component) in self.components.iter().enumerate() {
            writeln!(
                f,
                "Component {i}: size {}; members: {}",
                component.len(),
                component.iter().join(" ")
            )?;
        }
        Ok(())
    }
}

/// Degree statistics and the summary report
pub trait Statistics: Connectivity {
    /// Returns min/max/mean/median degree
    fn degree_statistics(&self) -> DegreeStatistics {
        // a graph always has at least one vertex
        DegreeStatistics::from_degrees(self.degrees()).unwrap_or(DegreeStatistics {
            min: 0,
            max: 0,
            mean: 0.0,
            median: 0.0,
        })
    }

    /// Computes all properties of [`GraphSummary`]. Dominated by the component computation
    /// and the sort of the degree sequence.
    fn summary(&self) -> GraphSummary {
        GraphSummary {
            vertices: self.number_of_nodes(),
            edges: self.number_of_edges(),
            degrees: self.degree_statistics(),
            components: self.connected_components(),
        }
    }
}

impl<G> Statistics for G where G: AdjacencyList + Sized {}
