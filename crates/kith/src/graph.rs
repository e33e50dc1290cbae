//! The graph store: named nodes and their weighted adjacency lists.
//!
//! The store is pure data. It is populated once (by the loader or
//! [`Graph::from_edges`]) and never mutated afterwards; per-query search
//! state lives in [`Search`](crate::engine::Search), not on the nodes, so
//! repeated queries borrow the graph shared and need no reset in between.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A weighted edge endpoint in a node's adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// Name of the adjacent node.
    pub id: String,
    /// Positive traversal cost of the connecting edge.
    pub weight: u64,
}

/// A named vertex (a person) and its adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique name; stable for the process lifetime.
    pub id: String,
    /// Declared edges, in input order. An edge is present only when the
    /// source data declared it with a positive weight.
    pub neighbors: Vec<Neighbor>,
}

/// Mapping from node name to [`Node`].
///
/// Invariant: every neighbor id referenced by any adjacency list exists as a
/// key. The loader guarantees this at build time; lookups inside the engine
/// therefore cannot miss.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: HashMap<String, Node>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an undirected graph from `(a, b, weight)` edge triples.
    ///
    /// Each triple inserts both directions, so callers list every edge once.
    /// Convenient for programmatic construction and tests; the CSV loader
    /// builds graphs directly instead, since the matrix format declares each
    /// direction on its own row.
    ///
    /// # Examples
    ///
    /// ```
    /// use kith::Graph;
    ///
    /// let graph = Graph::from_edges([("Ada", "Grace", 3), ("Grace", "Edsger", 1)]);
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, u64)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            let (a, b) = (a.into(), b.into());
            graph.insert_directed(a.clone(), b.clone(), weight);
            graph.insert_directed(b, a, weight);
        }
        graph
    }

    /// Add a node with no edges if it does not already exist.
    ///
    /// Useful for representing isolated people who appear in the roster but
    /// have no connections.
    pub fn add_node(&mut self, id: impl Into<String>) {
        self.ensure_node(id);
    }

    /// Ensure a node exists, creating it with an empty adjacency list.
    pub(crate) fn ensure_node(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.nodes.entry(id.clone()).or_insert(Node {
            id,
            neighbors: Vec::new(),
        });
    }

    /// Insert a single directed adjacency `from -> to`, creating both
    /// endpoints as needed.
    pub(crate) fn insert_directed(&mut self, from: String, to: String, weight: u64) {
        self.ensure_node(to.clone());
        let node = self.nodes.entry(from.clone()).or_insert(Node {
            id: from,
            neighbors: Vec::new(),
        });
        node.neighbors.push(Neighbor { id: to, weight });
    }

    /// Look up a node by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no node carries that name.
    pub fn get(&self, id: &str) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Returns `true` if a node with the given name exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges, counting each declared direction as half.
    ///
    /// For well-formed symmetric input this is the number of connections; an
    /// asymmetric declaration rounds down.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Iterate over all node names.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_inserts_both_directions() {
        let graph = Graph::from_edges([("A", "B", 4)]);

        let a = graph.get("A").unwrap();
        let b = graph.get("B").unwrap();
        assert_eq!(a.neighbors, vec![Neighbor { id: "B".into(), weight: 4 }]);
        assert_eq!(b.neighbors, vec![Neighbor { id: "A".into(), weight: 4 }]);
    }

    #[test]
    fn get_unknown_name_is_not_found() {
        let graph = Graph::from_edges([("A", "B", 1)]);

        let err = graph.get("Zelda").unwrap_err();
        assert!(matches!(err, Error::NotFound(name) if name == "Zelda"));
    }

    #[test]
    fn counts_reflect_undirected_edges() {
        let graph = Graph::from_edges([("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }
}
