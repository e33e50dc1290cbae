//! Loader for the adjacency-matrix CSV format.
//!
//! The input is a delimited text table. The header names a node per column,
//! with column 0 reserved for row labels:
//!
//! ```text
//! Name, A, B, C, D
//! A,    0, 1, 5, 0
//! B,    1, 0, 2, 0
//! C,    5, 2, 0, 1
//! D,    0, 0, 1, 0
//! ```
//!
//! A positive integer cell declares an edge from the row's node to the
//! column's node with that weight; `0` (or any non-positive value) means no
//! edge. The format stores each edge twice, once per direction, and the
//! graph is undirected by construction; the loader does NOT enforce that
//! both directions are present with matching weights; that is the producer's
//! contract. It does guarantee the graph invariant that every referenced
//! neighbor exists as a node, by requiring a row for every header column.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Load a graph from an adjacency-matrix CSV file on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::MalformedInput`] for any format violation (see [`from_reader`]).
pub fn from_path(path: &Path) -> Result<Graph> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot open {}: {e}", path.display()))
    })?;
    from_reader(file)
}

/// Load a graph from any reader producing adjacency-matrix CSV.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] (with a 1-based line number) when:
/// - the header is missing or names no node columns,
/// - a row's field count differs from the header's,
/// - a weight cell fails integer parsing,
/// - the same row name appears twice, or
/// - a header column never gets a row of its own while some row declares an
///   edge to it (which would leave a dangling neighbor reference).
pub fn from_reader(reader: impl Read) -> Result<Graph> {
    let mut lines = BufReader::new(reader).lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(Error::malformed(1, "missing header line")),
    };
    let columns = parse_fields(&header);
    if columns.len() < 2 {
        return Err(Error::malformed(
            1,
            "header must name at least one node column after the row-label column",
        ));
    }
    // Column 0 is the row-label column header ("Name" above); node ids start
    // at column 1.
    let names = &columns[1..];

    let mut graph = Graph::new();
    let mut row_names: HashSet<String> = HashSet::new();
    let mut self_loops = 0usize;

    for (index, line) in lines {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_fields(&line);
        if fields.len() != columns.len() {
            return Err(Error::malformed(
                line_no,
                format!(
                    "row has {} fields, header has {}",
                    fields.len(),
                    columns.len()
                ),
            ));
        }

        let row_name = fields[0].clone();
        if !row_names.insert(row_name.clone()) {
            return Err(Error::malformed(
                line_no,
                format!("duplicate row for {row_name:?}"),
            ));
        }
        graph.ensure_node(row_name.clone());

        for (name, cell) in names.iter().zip(&fields[1..]) {
            let weight: i64 = cell.parse().map_err(|_| {
                Error::malformed(line_no, format!("weight {cell:?} is not an integer"))
            })?;
            if weight <= 0 {
                continue;
            }
            if *name == row_name {
                // A positive diagonal would be a self-loop; the engine never
                // sees those.
                warn!(line = line_no, node = %row_name, weight, "dropping self-loop");
                self_loops += 1;
                continue;
            }
            #[allow(clippy::cast_sign_loss)] // positive after the check above
            graph.insert_directed(row_name.clone(), name.clone(), weight as u64);
        }
    }

    // Rows may only reference nodes that have rows of their own; otherwise
    // the engine could pop a candidate whose adjacency list does not exist.
    // ensure_node creates a node for every edge target, so any node beyond
    // the row set is a dangling reference.
    if graph.node_count() != row_names.len() {
        let mut missing: Vec<&str> = graph
            .node_ids()
            .filter(|id| !row_names.contains(*id))
            .collect();
        missing.sort_unstable();
        return Err(Error::malformed(
            1,
            format!("columns referenced without a row of their own: {missing:?}"),
        ));
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        self_loops,
        "graph loaded"
    );
    Ok(graph)
}

/// Split a delimited line into trimmed fields.
fn parse_fields(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}
