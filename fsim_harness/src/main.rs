//! fsim CLI
//!
//! Batch-test input strings against one finite automaton definition and
//! write per-input accept/reject verdicts plus timing.

use clap::Parser;
use fsim_harness::{load_automaton, read_cases, write_results, BatchReport, BatchRunner, BatchSummary};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Finite-automaton batch test harness
#[derive(Parser, Debug)]
#[command(name = "fsim")]
#[command(about = "Batch-test input strings against a finite automaton", long_about = None)]
struct Args {
    /// Automaton definition file (JSON: initial, final, transitions)
    automaton: PathBuf,

    /// Test file (one `input;expected` row per line, expected "1" = accept)
    tests: PathBuf,

    /// Output file for `input;expected;obtained;elapsed_ms` rows
    output: PathBuf,

    /// Verbose output (per-case debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// JSON summary on stdout for CI parsing
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Load the automaton and the test rows; both are fatal if unreadable.
    let automaton = match load_automaton(&args.automaton) {
        Ok(automaton) => automaton,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let cases = match read_cases(&args.tests) {
        Ok(cases) => cases,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Running {} cases against {}",
        cases.len(),
        args.automaton.display()
    );

    let runner = BatchRunner::new(automaton);
    let results = runner.run_all(&cases);
    let summary = BatchSummary::from_results(&results);

    if let Err(e) = write_results(&args.output, &results) {
        error!("{}", e);
        std::process::exit(1);
    }

    if args.json {
        let report = BatchReport::new(&summary, &results);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
    } else if summary.mismatched() == 0 {
        info!(
            "✓ All {} cases matched ({} accepted, {:.4}ms simulated)",
            summary.total,
            summary.accepted,
            summary.total_elapsed.as_secs_f64() * 1000.0,
        );
    } else {
        error!(
            "✗ {}/{} cases mismatched expectations",
            summary.mismatched(),
            summary.total,
        );
        for result in results.iter().filter(|r| !r.matched()) {
            error!(
                "  - '{}': expected {}, obtained {}",
                result.input, result.expected, result.obtained,
            );
        }
    }

    // Exit with proper code for CI
    if summary.mismatched() > 0 {
        std::process::exit(1);
    }
}
