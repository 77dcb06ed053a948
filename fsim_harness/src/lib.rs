//! Batch test harness for the fsim automaton engine.
//!
//! The harness owns everything around the core: it loads one automaton
//! definition from a JSON file, reads `;`-delimited test rows
//! (`input;expected`), runs each input through the engine while timing the
//! call, and writes one result row per input
//! (`input;expected;obtained;elapsed_ms`).
//!
//! The core never sees files, timers, or the expected-verdict encoding -
//! it consumes an [`fsim_core::Automaton`] and input strings, and produces
//! booleans. All fatal conditions (unreadable automaton file, malformed
//! JSON, unwritable output path) are reported here, before or after the
//! engine runs, never from inside it.

mod cases;
mod error;
mod loader;
mod report;
mod runner;

pub use cases::{read_cases, TestCase};
pub use error::HarnessError;
pub use loader::load_automaton;
pub use report::{write_results, BatchReport, Mismatch};
pub use runner::{BatchRunner, BatchSummary, CaseResult};
