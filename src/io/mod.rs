/*!
# IO

Reading graphs from the plain edge-list format and writing textual reports of computed results.

## Input Format

Whitespace-delimited tokens (line breaks carry no meaning):
- the first token is the number of vertices `n >= 1`,
- then `u v` pairs (unweighted, [`EdgeListReader`]) or `u v w` triples (weighted,
  [`WeightedEdgeListReader`]) follow until the end of the input.

Vertices are `1..=n` exactly as in the file. A record cut off by the end of the input, a token
that is not a number, or an endpoint outside of `1..=n` is rejected.

## Reports

[`ReportWrite`] renders the results of [`algo`](crate::algo) as text: the graph summary,
BFS/DFS spanning trees and shortest-path trees.
*/

pub mod edge_list;
pub mod report;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use report::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> GraphResult<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> GraphResult<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new parse error
macro_rules! parse_error {
    ($($arg:tt)*) => {
        GraphError::Parse(format!($($arg)*))
    };
}

/// Tries to parse the next token of a fallible token source and returns early if reading fails
/// or the token is missing or invalid
macro_rules! parse_next_value {
    ($tokens : expr, $name : expr) => {{
        let Some(token) = $tokens.next()? else {
            return Err(parse_error!("Premature end of input when parsing {}.", $name));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(parse_error!(
                    "Invalid value {token:?} found. Cannot parse {}.",
                    $name
                ));
            }
        }
    }};
}

use parse_error;
use parse_next_value;
