//! Test-case source - reads `;`-delimited rows of `input;expected`.

use crate::error::HarnessError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Field separator of the test and results files.
pub const SEPARATOR: char = ';';

/// One test row: an input string and the verdict it is expected to get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Input symbol sequence fed to the engine
    pub input: String,

    /// Expected verdict, decoded from the file ("1" = accept)
    pub expected: bool,
}

/// Reads all test cases from a delimited file, in row order.
///
/// Each row is `input;expected` where `expected` is `"1"` for accept and
/// anything else for reject - that encoding is an external-format
/// convention and is decoded here, never inside the core. Rows without a
/// separator decode as reject-expected; blank lines are skipped.
pub fn read_cases(path: &Path) -> Result<Vec<TestCase>, HarnessError> {
    let data = fs::read_to_string(path).map_err(|e| HarnessError::read(path, e))?;

    let cases: Vec<TestCase> = data
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect();

    debug!("Read {} test cases from {}", cases.len(), path.display());
    Ok(cases)
}

fn parse_row(line: &str) -> TestCase {
    match line.split_once(SEPARATOR) {
        Some((input, expected)) => TestCase {
            input: input.to_string(),
            expected: expected.trim() == "1",
        },
        None => TestCase {
            input: line.to_string(),
            expected: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_row_decodes_expected_flag() {
        assert_eq!(
            parse_row("abba;1"),
            TestCase {
                input: "abba".to_string(),
                expected: true,
            }
        );
        assert_eq!(
            parse_row("abba;0"),
            TestCase {
                input: "abba".to_string(),
                expected: false,
            }
        );
        // Anything other than "1" means reject.
        assert!(!parse_row("abba;yes").expected);
    }

    #[test]
    fn test_parse_row_without_separator_expects_reject() {
        let case = parse_row("loneinput");
        assert_eq!(case.input, "loneinput");
        assert!(!case.expected);
    }

    #[test]
    fn test_parse_row_keeps_empty_input() {
        let case = parse_row(";1");
        assert_eq!(case.input, "");
        assert!(case.expected);
    }

    #[test]
    fn test_read_cases_preserves_row_order_and_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ab;1\n\nba;0\n   \nabc;1\n").unwrap();

        let cases = read_cases(file.path()).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].input, "ab");
        assert!(cases[0].expected);
        assert_eq!(cases[1].input, "ba");
        assert!(!cases[1].expected);
        assert_eq!(cases[2].input, "abc");
    }
}
