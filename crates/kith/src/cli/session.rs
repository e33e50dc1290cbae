//! Interactive query session.
//!
//! Prompts for a starting and an ending name per query and loops until the
//! quit token (a single `x`, case-insensitive) is entered at either prompt
//! or input reaches end-of-file.

use std::io::{BufRead, Write};
use std::path::Path;

use colored::Colorize;
use kith::Kith;

use super::display;

/// Load the graph and run the interactive prompt loop on stdin/stdout.
pub fn run(graph_file: &Path) -> Result<(), kith::Error> {
    let kith = Kith::load(graph_file)?;

    println!(
        "Loaded {} people and {} connections from {}",
        kith.graph().node_count().to_string().green(),
        kith.graph().edge_count().to_string().green(),
        graph_file.display().to_string().cyan()
    );

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_loop(&kith, &mut input, &mut output)?;

    println!("Exiting...");
    Ok(())
}

/// The prompt loop proper, generic over its streams for testability.
fn run_loop(
    kith: &Kith,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), kith::Error> {
    loop {
        let Some(from) = prompt(input, output, "Enter the starting name (X to quit): ")? else {
            return Ok(());
        };
        let Some(to) = prompt(input, output, "Enter the ending name (X to quit): ")? else {
            return Ok(());
        };

        // Reject unknown names before the engine ever runs.
        if !kith.graph().contains(&from) || !kith.graph().contains(&to) {
            println!("One or more people is not in the graph.");
            continue;
        }

        match kith.find_path(&from, &to)? {
            Some(route) => display::print_route(&route),
            None => display::print_no_path(&from, &to),
        }
    }
}

/// Show a prompt and read one trimmed line.
///
/// Returns `None` on the quit token or end-of-file.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "\n{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim().to_string();
    if is_quit(&line) {
        return Ok(None);
    }
    Ok(Some(line))
}

/// The session quit token: a lone `x`, either case.
fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("x")
}
