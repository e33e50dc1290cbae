//! Path reconstruction from recorded predecessor links.

use crate::engine::Search;
use crate::error::{Error, Result};

/// An ordered start-to-end path and its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Node names from start to end, both inclusive.
    pub nodes: Vec<String>,
    /// Sum of the traversed edge weights; equals the end node's finalized
    /// distance.
    pub total_weight: u64,
}

impl Route {
    /// Number of edges traversed (one less than the number of nodes).
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Walk the predecessor chain of a successful [`Search`] back from the end
/// node and return the route in start-to-end order.
///
/// # Errors
///
/// Returns [`Error::InternalConsistency`] if the search never reached its
/// end node, or if the predecessor chain fails to terminate at the start
/// within the number of finalized labels. Neither happens in correct
/// operation; both indicate an engine or data invariant violation.
pub fn reconstruct(search: &Search) -> Result<Route> {
    if !search.reached {
        return Err(Error::InternalConsistency(format!(
            "reconstruct called on a search that never reached {:?}",
            search.end
        )));
    }

    let total_weight = search
        .labels
        .get(&search.end)
        .map(|l| l.distance)
        .ok_or_else(|| {
            Error::InternalConsistency(format!("end node {:?} carries no label", search.end))
        })?;

    // Every hop consumes a distinct finalized label, so a well-formed chain
    // terminates within labels.len() steps.
    let max_steps = search.labels.len();
    let mut nodes = vec![search.end.clone()];
    let mut current = search.end.as_str();

    for _ in 0..max_steps {
        let label = search.labels.get(current).ok_or_else(|| {
            Error::InternalConsistency(format!("predecessor chain leads to unlabeled {current:?}"))
        })?;

        match &label.predecessor {
            Some(prev) => {
                nodes.push(prev.clone());
                current = prev;
            }
            None => {
                // Only the start node has no predecessor.
                nodes.reverse();
                return Ok(Route {
                    nodes,
                    total_weight,
                });
            }
        }
    }

    Err(Error::InternalConsistency(format!(
        "predecessor chain from {:?} did not terminate at {:?} within {max_steps} steps",
        search.end, search.start
    )))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::engine::{Label, find_shortest_path};
    use crate::graph::Graph;

    fn label(distance: u64, predecessor: Option<&str>) -> Label {
        Label {
            distance,
            predecessor: predecessor.map(String::from),
        }
    }

    #[test]
    fn reconstructs_start_to_end_order() {
        let graph = Graph::from_edges([("A", "B", 1), ("B", "C", 2), ("A", "C", 5), ("C", "D", 1)]);
        let search = find_shortest_path(&graph, "A", "D").unwrap();

        let route = reconstruct(&search).unwrap();

        assert_eq!(route.nodes, vec!["A", "B", "C", "D"]);
        assert_eq!(route.total_weight, 4);
        assert_eq!(route.hops(), 3);
    }

    #[test]
    fn same_node_route_is_single_node() {
        let graph = Graph::from_edges([("A", "B", 1)]);
        let search = find_shortest_path(&graph, "A", "A").unwrap();

        let route = reconstruct(&search).unwrap();

        assert_eq!(route.nodes, vec!["A"]);
        assert_eq!(route.total_weight, 0);
        assert_eq!(route.hops(), 0);
    }

    #[test]
    fn unreached_search_is_rejected() {
        let mut graph = Graph::from_edges([("A", "B", 1)]);
        graph.ensure_node("Z");
        let search = find_shortest_path(&graph, "A", "Z").unwrap();

        assert!(matches!(
            reconstruct(&search),
            Err(Error::InternalConsistency(_))
        ));
    }

    #[test]
    fn cyclic_predecessor_chain_is_detected() {
        // Hand-built corrupt search: B and C point at each other, so the
        // walk from C can never reach the start label.
        let mut labels = HashMap::new();
        labels.insert("A".to_string(), label(0, None));
        labels.insert("B".to_string(), label(1, Some("C")));
        labels.insert("C".to_string(), label(2, Some("B")));
        let search = Search {
            start: "A".to_string(),
            end: "C".to_string(),
            labels,
            reached: true,
        };

        assert!(matches!(
            reconstruct(&search),
            Err(Error::InternalConsistency(_))
        ));
    }
}
