//! The simulation engine - epsilon-closure plus subset stepping.
//!
//! Acceptance is decided over *sets* of states: after closing the initial
//! state under epsilon transitions, each input symbol maps the current set
//! to the union of its per-state destinations, re-closed under epsilon.
//! Iteration order inside the sets never affects the verdict - acceptance
//! depends only on membership, which is what makes this correct for
//! nondeterministic automata where a single-path walk is not.
//!
//! Both functions are total: unknown states, automata without transitions,
//! and empty inputs all flow through the normal algorithm and produce a
//! verdict, never a failure.

use crate::automaton::{Automaton, StateId};
use std::collections::HashSet;

/// Closes a set of states under epsilon transitions.
///
/// Worklist reachability: each state enters the worklist at most once, so
/// the closure terminates even when epsilon transitions form cycles.
/// Closing an already-closed set returns the same set.
pub fn epsilon_closure(
    automaton: &Automaton,
    states: impl IntoIterator<Item = StateId>,
) -> HashSet<StateId> {
    let mut closure = HashSet::new();
    let mut worklist = Vec::new();

    for state in states {
        if closure.insert(state.clone()) {
            worklist.push(state);
        }
    }

    while let Some(state) = worklist.pop() {
        for next in automaton.epsilon_from(&state) {
            if closure.insert(next.clone()) {
                worklist.push(next.clone());
            }
        }
    }

    closure
}

/// Decides whether `input` is accepted by `automaton`.
///
/// Returns true iff at least one state reachable after consuming the full
/// input (following nondeterministic transitions and epsilon-closure) is a
/// final state. Rejection covers the case where the reachable set becomes
/// empty mid-input; once empty it can never repopulate, so the loop stops
/// early with the same `false` verdict the full walk would produce.
///
/// `input` must not contain the epsilon marker - epsilon labels transitions,
/// it never appears in input (any `char` in a Rust `&str` is a real symbol,
/// so this holds by construction).
pub fn simulate(automaton: &Automaton, input: &str) -> bool {
    let mut current = epsilon_closure(automaton, [automaton.initial().clone()]);

    for symbol in input.chars() {
        let next: Vec<StateId> = current
            .iter()
            .flat_map(|state| automaton.transitions_from(state, symbol))
            .cloned()
            .collect();
        current = epsilon_closure(automaton, next);

        if current.is_empty() {
            return false;
        }
    }

    current.iter().any(|state| automaton.is_final(state))
}
