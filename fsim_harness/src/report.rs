//! Result sink - writes per-case rows and the machine-readable summary.

use crate::cases::SEPARATOR;
use crate::error::HarnessError;
use crate::runner::{BatchSummary, CaseResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes one `input;expected;obtained;elapsed_ms` row per case.
///
/// Booleans are rendered `true`/`false` and elapsed time as milliseconds
/// with four decimal places, in the same row order the cases were run.
pub fn write_results(path: &Path, results: &[CaseResult]) -> Result<(), HarnessError> {
    let mut file = File::create(path).map_err(|e| HarnessError::write(path, e))?;

    for result in results {
        writeln!(file, "{}", format_row(result)).map_err(|e| HarnessError::write(path, e))?;
    }

    info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}

fn format_row(result: &CaseResult) -> String {
    format!(
        "{input}{sep}{expected}{sep}{obtained}{sep}{elapsed:.4}",
        input = result.input,
        expected = result.expected,
        obtained = result.obtained,
        elapsed = result.elapsed.as_secs_f64() * 1000.0,
        sep = SEPARATOR,
    )
}

/// Machine-readable batch summary, printed on stdout under `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Total cases run
    pub total: usize,

    /// Cases whose verdict matched the expected one
    pub matched: usize,

    /// Cases whose verdict differed
    pub mismatched: usize,

    /// Cases the engine accepted
    pub accepted: usize,

    /// Sum of per-case simulation time, in milliseconds
    pub total_elapsed_ms: f64,

    /// Per-case mismatch details
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub mismatches: Vec<Mismatch>,
}

/// One verdict that differed from its expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mismatch {
    pub input: String,
    pub expected: bool,
    pub obtained: bool,
}

impl BatchReport {
    /// Builds the report from a summary plus the raw results.
    pub fn new(summary: &BatchSummary, results: &[CaseResult]) -> Self {
        Self {
            total: summary.total,
            matched: summary.matched,
            mismatched: summary.mismatched(),
            accepted: summary.accepted,
            total_elapsed_ms: summary.total_elapsed.as_secs_f64() * 1000.0,
            mismatches: results
                .iter()
                .filter(|r| !r.matched())
                .map(|r| Mismatch {
                    input: r.input.clone(),
                    expected: r.expected,
                    obtained: r.obtained,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    fn result(input: &str, expected: bool, obtained: bool) -> CaseResult {
        CaseResult {
            input: input.to_string(),
            expected,
            obtained,
            elapsed: Duration::from_micros(1500),
        }
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&result("abba", true, true)), "abba;true;true;1.5000");
    }

    #[test]
    fn test_write_results_one_row_per_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let results = vec![result("a", true, true), result("b", false, true)];
        write_results(&path, &results).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = written.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "a;true;true;1.5000");
        assert_eq!(rows[1], "b;false;true;1.5000");
    }

    #[test]
    fn test_unwritable_path_is_a_write_error() {
        let err = write_results(Path::new("/nonexistent/dir/out.txt"), &[]).unwrap_err();
        assert!(matches!(err, HarnessError::Write { .. }));
    }

    #[test]
    fn test_report_collects_mismatches() {
        let results = vec![result("a", true, true), result("b", true, false)];
        let summary = BatchSummary::from_results(&results);
        let report = BatchReport::new(&summary, &results);

        assert_eq!(report.total, 2);
        assert_eq!(report.mismatched, 1);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].input, "b");

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"mismatched\":1"));
    }
}
