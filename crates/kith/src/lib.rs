//! # Kith: shortest-path queries over weighted acquaintance graphs
//!
//! Kith loads a weighted, undirected social-adjacency graph from a CSV
//! matrix and answers repeated minimum-weight path queries against it. It is
//! a library first and a CLI second.
//!
//! ## Design Philosophy
//!
//! - **Immutable store, per-query results** - the graph never changes after
//!   load; each query returns its own label table, so queries compose and
//!   nothing needs resetting in between
//! - **Lazy-deletion frontier** - the engine keeps a plain binary heap and
//!   discards stale entries at pop time instead of implementing decrease-key
//! - **Negative answers are not errors** - an unreachable target is
//!   `Ok(None)`, not an `Err`
//!
//! ## Quick Start
//!
//! ```
//! use kith::Kith;
//!
//! let csv = "\
//! Name, A, B, C, D
//! A, 0, 1, 5, 0
//! B, 1, 0, 2, 0
//! C, 5, 2, 0, 1
//! D, 0, 0, 1, 0
//! ";
//! let kith = Kith::from_reader(csv.as_bytes())?;
//!
//! let route = kith.find_path("A", "D")?.expect("D is reachable from A");
//! assert_eq!(route.nodes, vec!["A", "B", "C", "D"]);
//! assert_eq!(route.total_weight, 4);
//! # Ok::<(), kith::Error>(())
//! ```

mod engine;
mod error;
mod graph;
pub mod loader;
mod path;

pub use engine::{Label, Search, find_shortest_path};
pub use error::{Error, Result};
pub use graph::{Graph, Neighbor, Node};
pub use path::{Route, reconstruct};

use std::io::Read;
use std::path::Path;

/// A loaded graph and its query interface.
///
/// `Kith` is the main entry point: construct it once from an
/// adjacency-matrix CSV, then call [`find_path`](Self::find_path) as many
/// times as needed. The underlying [`Graph`] is immutable, so queries are
/// independent and repeatable.
#[derive(Debug)]
pub struct Kith {
    graph: Graph,
}

impl Kith {
    /// Load a graph from an adjacency-matrix CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::MalformedInput`] if it violates the matrix format.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            graph: loader::from_path(path)?,
        })
    }

    /// Load a graph from any reader producing adjacency-matrix CSV.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(Self {
            graph: loader::from_reader(reader)?,
        })
    }

    /// Wrap an already-built graph.
    #[must_use]
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// The loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Find the minimum-weight path between two named people.
    ///
    /// Returns `Ok(None)` when no path exists; that is a normal negative
    /// answer. Querying a name against itself returns the trivial
    /// single-node route at weight 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if either name is absent from the graph,
    /// or [`Error::InternalConsistency`] if the recorded predecessor chain
    /// is corrupt (never expected in correct operation).
    pub fn find_path(&self, from: &str, to: &str) -> Result<Option<Route>> {
        let search = engine::find_shortest_path(&self.graph, from, to)?;
        if !search.reached() {
            return Ok(None);
        }
        path::reconstruct(&search).map(Some)
    }
}
