//! The shortest-path engine: label-setting search with a lazy-deletion
//! frontier.
//!
//! This is classic Dijkstra over positive integer weights. The frontier is a
//! [`BinaryHeap`] of [`Candidate`]s ordered by ascending tentative distance.
//! Rather than supporting decrease-key, a node that gains a better tentative
//! distance simply gets a second candidate pushed; stale entries are
//! recognized and discarded at pop time because the node is already
//! finalized. This keeps the frontier a plain heap at the cost of holding
//! duplicates, which is bounded by the total edge count, so every query terminates.
//!
//! ## Design
//!
//! Search state does not live on graph nodes. A query borrows the graph
//! shared and returns its own [`Search`] label table, so the graph needs no
//! reset between queries and a finalized label is written exactly once.
//! The search stops as soon as the end node is finalized; labels for nodes
//! never finalized are simply absent. Early exit is sound because with
//! strictly positive weights no shorter path to the end node can remain in
//! the unexplored frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;

/// Distance and predecessor fixed when a node is finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Minimum sum of edge weights from the start node.
    pub distance: u64,
    /// Neighbor through which that minimum was achieved; `None` only for
    /// the start node.
    pub predecessor: Option<String>,
}

/// The result of one shortest-path query.
///
/// Holds a label for every node finalized before the search terminated.
/// When [`reached`](Self::reached) is `true` the end node carries a label
/// and [`reconstruct`](crate::path::reconstruct) can walk the predecessor
/// chain back to the start.
#[derive(Debug)]
pub struct Search {
    pub(crate) start: String,
    pub(crate) end: String,
    pub(crate) labels: HashMap<String, Label>,
    pub(crate) reached: bool,
}

impl Search {
    /// Name of the query's start node.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Name of the query's end node.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether the end node was finalized (a path exists).
    #[must_use]
    pub fn reached(&self) -> bool {
        self.reached
    }

    /// The finalized label for a node, if the search got that far.
    #[must_use]
    pub fn label(&self, id: &str) -> Option<&Label> {
        self.labels.get(id)
    }

    /// Minimum distance to the end node, when reached.
    #[must_use]
    pub fn distance(&self) -> Option<u64> {
        if self.reached {
            self.labels.get(&self.end).map(|l| l.distance)
        } else {
            None
        }
    }
}

/// A tentative frontier entry: one possible way to reach `node`.
///
/// Several candidates for the same node may coexist; only the first one
/// popped finalizes it.
#[derive(Debug, Clone)]
struct Candidate {
    node: String,
    tentative: u64,
    predecessor: String,
}

// Min-heap ordering: BinaryHeap is a max-heap, so compare reversed on the
// tentative distance. Equality follows the same key so Ord and Eq agree;
// tie order between equal distances is unspecified.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.tentative.cmp(&self.tentative)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.tentative == other.tentative
    }
}

impl Eq for Candidate {}

/// Compute the minimum-weight path from `start` to `end`.
///
/// Returns a [`Search`] whose [`reached`](Search::reached) flag says whether
/// a path exists; an unreachable end node is a normal negative result, not
/// an error. Querying a node against itself is trivial success: the start
/// is labeled at distance 0 and the route is the single node.
///
/// # Errors
///
/// Returns [`Error::NotFound`](crate::Error::NotFound) if either endpoint is
/// not in the graph.
pub fn find_shortest_path(graph: &Graph, start: &str, end: &str) -> Result<Search> {
    // Validate both endpoints up front so a bad end name fails before any
    // work happens.
    let start_node = graph.get(start)?;
    graph.get(end)?;

    let mut labels: HashMap<String, Label> = HashMap::new();
    labels.insert(
        start.to_string(),
        Label {
            distance: 0,
            predecessor: None,
        },
    );

    if start == end {
        return Ok(Search {
            start: start.to_string(),
            end: end.to_string(),
            labels,
            reached: true,
        });
    }

    let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut pushes: usize = 0;
    let mut stale: usize = 0;

    for neighbor in &start_node.neighbors {
        frontier.push(Candidate {
            node: neighbor.id.clone(),
            tentative: neighbor.weight,
            predecessor: start.to_string(),
        });
        pushes += 1;
    }

    let mut reached = false;
    while let Some(candidate) = frontier.pop() {
        if labels.contains_key(&candidate.node) {
            // Lazy deletion: the node was finalized through a cheaper
            // candidate, this entry is stale.
            stale += 1;
            continue;
        }

        labels.insert(
            candidate.node.clone(),
            Label {
                distance: candidate.tentative,
                predecessor: Some(candidate.predecessor),
            },
        );

        if candidate.node == end {
            reached = true;
            break;
        }

        // Graph invariant: every referenced neighbor exists, so this lookup
        // cannot fail on a well-formed graph.
        let node = graph.get(&candidate.node)?;
        for neighbor in &node.neighbors {
            frontier.push(Candidate {
                node: neighbor.id.clone(),
                tentative: candidate.tentative + neighbor.weight,
                predecessor: candidate.node.clone(),
            });
            pushes += 1;
        }
    }

    debug!(
        start,
        end,
        reached,
        finalized = labels.len(),
        pushes,
        stale,
        "shortest-path search completed"
    );

    Ok(Search {
        start: start.to_string(),
        end: end.to_string(),
        labels,
        reached,
    })
}
