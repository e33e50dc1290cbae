//! Kith CLI - shortest paths between people from the command line.
//!
//! Loads a weighted adjacency-matrix CSV and answers minimum-weight path
//! queries, either as a one-shot `--from`/`--to` pair or in an interactive
//! session.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Kith: shortest-path queries over weighted acquaintance graphs.
#[derive(Parser)]
#[command(name = "kith")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Adjacency-matrix CSV file to load
    graph: PathBuf,

    /// Starting name for a one-shot query (requires --to)
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Ending name for a one-shot query (requires --from)
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let result = match (cli.from, cli.to) {
        (Some(from), Some(to)) => cli::query::run(&cli.graph, &from, &to),
        _ => cli::session::run(&cli.graph),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
