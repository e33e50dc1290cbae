//! One-shot `--from`/`--to` query.

use std::path::Path;

use kith::Kith;

use super::display;

/// Load the graph and run a single query.
pub fn run(graph_file: &Path, from: &str, to: &str) -> Result<(), kith::Error> {
    let kith = Kith::load(graph_file)?;

    match kith.find_path(from, to)? {
        Some(route) => display::print_route(&route),
        None => display::print_no_path(from, to),
    }

    Ok(())
}
