//! Batch runner - executes test cases against one automaton.

use crate::cases::TestCase;
use fsim_core::{simulate, Automaton};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result of running one test case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// Input that was simulated
    pub input: String,

    /// Verdict the test file expected
    pub expected: bool,

    /// Verdict the engine produced
    pub obtained: bool,

    /// Wall time of the `simulate` call alone
    pub elapsed: Duration,
}

impl CaseResult {
    /// Returns true if the obtained verdict matches the expected one.
    pub fn matched(&self) -> bool {
        self.expected == self.obtained
    }
}

/// Aggregate counts over a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Total cases run
    pub total: usize,

    /// Cases whose obtained verdict matched the expected one
    pub matched: usize,

    /// Cases the engine accepted
    pub accepted: usize,

    /// Sum of per-case simulation time
    pub total_elapsed: Duration,
}

impl BatchSummary {
    /// Builds a summary from a slice of results.
    pub fn from_results(results: &[CaseResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.total += 1;
            if result.matched() {
                summary.matched += 1;
            }
            if result.obtained {
                summary.accepted += 1;
            }
            summary.total_elapsed += result.elapsed;
        }
        summary
    }

    /// Number of cases whose verdict differed from the expected one.
    pub fn mismatched(&self) -> usize {
        self.total - self.matched
    }
}

/// Runs test cases against one immutable automaton.
///
/// The engine is stateless across calls, so the runner holds nothing but
/// the automaton; cases are executed in the order given and results are
/// handed back in that same order.
pub struct BatchRunner {
    automaton: Automaton,
}

impl BatchRunner {
    /// Creates a runner for the given automaton.
    pub fn new(automaton: Automaton) -> Self {
        Self { automaton }
    }

    /// Runs a single case, timing only the `simulate` call.
    pub fn run_case(&self, case: &TestCase) -> CaseResult {
        let start = Instant::now();
        let obtained = simulate(&self.automaton, &case.input);
        let elapsed = start.elapsed();

        CaseResult {
            input: case.input.clone(),
            expected: case.expected,
            obtained,
            elapsed,
        }
    }

    /// Runs all cases in order, logging each mismatch.
    pub fn run_all(&self, cases: &[TestCase]) -> Vec<CaseResult> {
        let mut results = Vec::with_capacity(cases.len());

        for case in cases {
            let result = self.run_case(case);
            if result.matched() {
                debug!(
                    "'{}' -> {} ({:.4}ms)",
                    result.input,
                    result.obtained,
                    result.elapsed.as_secs_f64() * 1000.0,
                );
            } else {
                warn!(
                    "'{}' expected {} but obtained {}",
                    result.input, result.expected, result.obtained,
                );
            }
            results.push(result);
        }

        results
    }
}
