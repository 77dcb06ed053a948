//! Automaton loader - reads the serialized automaton definition.

use crate::error::HarnessError;
use fsim_core::{Automaton, AutomatonSpec};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads an automaton from a JSON file.
///
/// The file carries the [`AutomatonSpec`] shape: `initial`, `final`, and
/// `transitions` with `read: null` (or absent) denoting epsilon. Structural
/// well-formedness beyond JSON validity is not checked - states referenced
/// nowhere simply yield empty transition sets during simulation.
pub fn load_automaton(path: &Path) -> Result<Automaton, HarnessError> {
    let data = fs::read_to_string(path).map_err(|e| HarnessError::read(path, e))?;
    let spec: AutomatonSpec =
        serde_json::from_str(&data).map_err(|e| HarnessError::automaton(path, e))?;

    let automaton = Automaton::from(spec);
    debug!(
        "Loaded automaton: initial={} finals={} transitions={}",
        automaton.initial(),
        automaton.final_count(),
        automaton.transition_count(),
    );

    Ok(automaton)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsim_core::{simulate, StateId};
    use std::io::Write;

    #[test]
    fn test_load_automaton_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "initial": "q0",
                "final": ["q1"],
                "transitions": [
                    {{"from": "q0", "read": "a", "to": "q1"}},
                    {{"from": "q0", "read": null, "to": "q1"}}
                ]
            }}"#
        )
        .unwrap();

        let automaton = load_automaton(file.path()).unwrap();
        assert_eq!(automaton.initial(), &StateId::from("q0"));
        assert_eq!(automaton.transition_count(), 2);
        assert!(simulate(&automaton, ""));
        assert!(simulate(&automaton, "a"));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = load_automaton(Path::new("/nonexistent/automaton.json")).unwrap_err();
        assert!(matches!(err, HarnessError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_an_automaton_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_automaton(file.path()).unwrap_err();
        assert!(matches!(err, HarnessError::Automaton { .. }));
    }
}
