//! Common display utilities for CLI commands.

use colored::Colorize;
use kith::Route;

/// Print a successful route, one name per line, followed by a weight
/// summary.
pub fn print_route(route: &Route) {
    println!("The best path between these two people is:");
    for (i, name) in route.nodes.iter().enumerate() {
        if i == 0 || i == route.nodes.len() - 1 {
            println!("{}", name.cyan().bold());
        } else {
            println!("{name}");
        }
    }
    println!(
        "{}: total weight {} over {} hops",
        "Summary".dimmed(),
        route.total_weight.to_string().green(),
        route.hops()
    );
}

/// Print the negative result for an unreachable pair.
pub fn print_no_path(from: &str, to: &str) {
    println!(
        "There is {} a path between {} and {}.",
        "NOT".red().bold(),
        from.cyan(),
        to.cyan()
    );
}
