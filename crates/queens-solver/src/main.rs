//! CLI entry point for the N-Queens solver.
//!
//! Usage:
//!   queens-solver solve [options]
//!
//! Options:
//!   -n, --side-length <n>     Side length of the chess board (default: 8)
//!   -p, --print               Print every solution
//!   --json                    Emit a JSON summary instead of plain text
//!   --max-side-length <n>     Largest accepted side length (default: 12)
//!   -v, --verbose             Log search progress to stderr

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

use queens_solver::{find_solutions, Solution, SolverConfig, SolverResult, DEFAULT_MAX_SIDE_LENGTH};

#[derive(Parser)]
#[command(name = "queens-solver")]
#[command(about = "Enumerate every solution of the N-Queens puzzle")]
#[command(version)]
struct Cli {
    /// Log search progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all solutions for one board size
    Solve {
        /// Side length of the chess board
        #[arg(short = 'n', long, default_value = "8")]
        side_length: usize,

        /// Print every solution
        #[arg(short, long)]
        print: bool,

        /// Emit a JSON summary instead of plain text
        #[arg(long)]
        json: bool,

        /// Largest accepted side length
        #[arg(long, default_value_t = DEFAULT_MAX_SIDE_LENGTH)]
        max_side_length: usize,
    },
}

/// Output format for the JSON summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput<'a> {
    side_length: usize,
    number_of_results: usize,
    calculation_time: String,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    solutions: Option<&'a [Solution]>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Solve {
            side_length,
            print,
            json,
            max_side_length,
        } => {
            let config = SolverConfig { max_side_length };

            let mut out = io::stdout().lock();
            if !json {
                writeln!(out, "Solving n queens problem for n={side_length}...")
                    .context("failed to write to stdout")?;
            }

            let result = find_solutions(side_length, &config)?;

            if json {
                let output = format_result(&result, print);
                serde_json::to_writer_pretty(&mut out, &output)
                    .context("failed to serialize result")?;
                writeln!(out).context("failed to write to stdout")?;
            } else {
                if print {
                    for solution in &result.solutions {
                        write!(out, "{solution}").context("failed to write to stdout")?;
                    }
                }
                writeln!(
                    out,
                    "Finding {} solutions took {:?}",
                    result.solution_count(),
                    result.elapsed
                )
                .context("failed to write to stdout")?;
            }
        }
    }

    Ok(())
}

fn format_result(result: &SolverResult, include_solutions: bool) -> SolveOutput<'_> {
    SolveOutput {
        side_length: result.side_length,
        number_of_results: result.solution_count(),
        calculation_time: format!("{:?}", result.elapsed),
        time_elapsed_ms: result.elapsed_ms(),
        solutions: include_solutions.then_some(result.solutions.as_slice()),
    }
}
