//! Integration tests for the load-then-query pipeline through the public
//! `Kith` API.
//!
//! Fixture graph (the CSV written to a temp dir):
//!
//! ```text
//!   A --1-- B
//!   |       |
//!   5       2
//!   |       |
//!   +------ C --1-- D        Z (isolated)
//! ```

use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use tempfile::TempDir;

use kith::{Error, Kith};

const FIXTURE: &str = "\
Name, A, B, C, D, Z
A, 0, 1, 5, 0, 0
B, 1, 0, 2, 0, 0
C, 5, 2, 0, 1, 0
D, 0, 0, 1, 0, 0
Z, 0, 0, 0, 0, 0
";

/// Write the fixture CSV into a temp dir and load it.
fn fixture() -> (TempDir, PathBuf, Kith) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("people.csv");
    fs::write(&path, FIXTURE).expect("failed to write fixture");
    let kith = Kith::load(&path).expect("failed to load fixture");
    (dir, path, kith)
}

#[test]
fn load_reports_expected_shape() {
    let (_dir, _path, kith) = fixture();

    assert_eq!(kith.graph().node_count(), 5);
    assert_eq!(kith.graph().edge_count(), 4);
}

#[rstest]
#[case::multi_hop_beats_direct("A", "D", &["A", "B", "C", "D"], 4)]
#[case::direct_edge("A", "B", &["A", "B"], 1)]
#[case::reverse_direction("D", "A", &["D", "C", "B", "A"], 4)]
#[case::mid_graph("B", "D", &["B", "C", "D"], 3)]
fn finds_minimum_weight_routes(
    #[case] from: &str,
    #[case] to: &str,
    #[case] expected: &[&str],
    #[case] weight: u64,
) {
    let (_dir, _path, kith) = fixture();

    let route = kith
        .find_path(from, to)
        .expect("query failed")
        .expect("route should exist");

    assert_eq!(route.nodes, expected);
    assert_eq!(route.total_weight, weight);
}

#[test]
fn route_weight_equals_sum_of_traversed_edges() {
    let (_dir, _path, kith) = fixture();

    let route = kith.find_path("A", "D").unwrap().unwrap();

    // Re-walk the route over the graph and sum edge weights independently
    // of the engine's recorded distance.
    let mut walked = 0;
    for pair in route.nodes.windows(2) {
        let node = kith.graph().get(&pair[0]).unwrap();
        let edge = node
            .neighbors
            .iter()
            .find(|n| n.id == pair[1])
            .expect("consecutive route nodes must be adjacent");
        walked += edge.weight;
    }
    assert_eq!(walked, route.total_weight);
}

#[rstest]
#[case("A")]
#[case("B")]
#[case("D")]
fn isolated_node_is_unreachable_from_everyone(#[case] from: &str) {
    let (_dir, _path, kith) = fixture();

    assert!(kith.find_path(from, "Z").unwrap().is_none());
}

#[test]
fn same_node_query_is_trivial_success() {
    let (_dir, _path, kith) = fixture();

    let route = kith.find_path("A", "A").unwrap().unwrap();
    assert_eq!(route.nodes, vec!["A"]);
    assert_eq!(route.total_weight, 0);
}

#[test]
fn isolated_node_to_itself_is_also_trivial_success() {
    let (_dir, _path, kith) = fixture();

    let route = kith.find_path("Z", "Z").unwrap().unwrap();
    assert_eq!(route.nodes, vec!["Z"]);
}

#[test]
fn unknown_name_is_rejected() {
    let (_dir, _path, kith) = fixture();

    assert!(matches!(
        kith.find_path("A", "Nobody"),
        Err(Error::NotFound(name)) if name == "Nobody"
    ));
}

#[test]
fn repeated_queries_are_identical() {
    // The graph is immutable and search state is per-query, so nothing
    // needs resetting between runs.
    let (_dir, _path, kith) = fixture();

    let first = kith.find_path("A", "D").unwrap().unwrap();
    let second = kith.find_path("A", "D").unwrap().unwrap();
    assert_eq!(first, second);

    // A failed query in between leaves later queries untouched too.
    assert!(kith.find_path("A", "Z").unwrap().is_none());
    let third = kith.find_path("A", "D").unwrap().unwrap();
    assert_eq!(first, third);
}

#[test]
fn load_rejects_missing_file() {
    let err = Kith::load(std::path::Path::new("/nonexistent/people.csv")).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_rejects_malformed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Name, A, B\nA, 0, 1\nB, 1\n").unwrap();

    let err = Kith::load(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { line: 3, .. }));
}
