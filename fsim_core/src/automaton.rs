//! The automaton model - states, transitions, and indexed lookup.
//!
//! An [`Automaton`] is constructed once (usually from the serialized
//! [`AutomatonSpec`] shape) and is read-only for the lifetime of the run.
//! Construction indexes the transition collection by source state so the
//! engine's per-symbol lookups are hash probes instead of rescans of the
//! full transition list.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Opaque identifier of an automaton state.
///
/// Unique within one automaton; carries no behavior of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(String);

impl StateId {
    /// Creates a state id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled transition between two states.
///
/// `read: None` denotes an epsilon transition, consumable without reading
/// an input symbol. Several transitions may share the same `(from, read)`
/// pair (nondeterminism) and duplicates are harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Source state
    pub from: StateId,

    /// Symbol consumed by the transition; `None` is the epsilon marker
    #[serde(default)]
    pub read: Option<char>,

    /// Destination state
    pub to: StateId,
}

impl Transition {
    /// Creates a symbol-consuming transition.
    pub fn on(from: impl Into<StateId>, read: char, to: impl Into<StateId>) -> Self {
        Self {
            from: from.into(),
            read: Some(read),
            to: to.into(),
        }
    }

    /// Creates an epsilon transition.
    pub fn epsilon(from: impl Into<StateId>, to: impl Into<StateId>) -> Self {
        Self {
            from: from.into(),
            read: None,
            to: to.into(),
        }
    }
}

/// Serialized automaton shape, as supplied by the loader.
///
/// This is the wire contract: `initial` (state id), `final` (state ids),
/// `transitions` (`{from, read, to}` with `read` null or absent for
/// epsilon). No structural well-formedness is checked beyond what
/// deserialization itself requires - references to states that appear
/// nowhere else simply yield empty transition sets during simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomatonSpec {
    /// Initial state
    pub initial: StateId,

    /// Accepting states
    #[serde(rename = "final")]
    pub finals: Vec<StateId>,

    /// Unordered transition collection
    pub transitions: Vec<Transition>,
}

/// Immutable automaton aggregate with indexed transition lookup.
///
/// Transitions are indexed at construction into a per-state symbol map and
/// a per-state epsilon destination set; lookups on states or symbols with
/// no matching transitions return empty results, never errors.
#[derive(Debug, Clone)]
pub struct Automaton {
    initial: StateId,
    finals: HashSet<StateId>,

    /// state -> symbol -> destination set
    by_symbol: HashMap<StateId, HashMap<char, HashSet<StateId>>>,

    /// state -> epsilon destination set
    epsilon: HashMap<StateId, HashSet<StateId>>,

    transition_count: usize,
}

impl Automaton {
    /// Builds an automaton from its parts, indexing the transitions.
    pub fn new(
        initial: impl Into<StateId>,
        finals: impl IntoIterator<Item = StateId>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Self {
        let mut by_symbol: HashMap<StateId, HashMap<char, HashSet<StateId>>> = HashMap::new();
        let mut epsilon: HashMap<StateId, HashSet<StateId>> = HashMap::new();
        let mut transition_count = 0;

        for t in transitions {
            transition_count += 1;
            match t.read {
                Some(symbol) => {
                    by_symbol
                        .entry(t.from)
                        .or_default()
                        .entry(symbol)
                        .or_default()
                        .insert(t.to);
                }
                None => {
                    epsilon.entry(t.from).or_default().insert(t.to);
                }
            }
        }

        Self {
            initial: initial.into(),
            finals: finals.into_iter().collect(),
            by_symbol,
            epsilon,
            transition_count,
        }
    }

    /// Returns the initial state.
    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    /// Returns true if `state` is an accepting state.
    pub fn is_final(&self, state: &StateId) -> bool {
        self.finals.contains(state)
    }

    /// Destination states of all transitions matching `(state, symbol)`.
    ///
    /// Empty for unknown states or symbols - not an error condition.
    pub fn transitions_from<'a>(
        &'a self,
        state: &StateId,
        symbol: char,
    ) -> impl Iterator<Item = &'a StateId> + 'a {
        self.by_symbol
            .get(state)
            .and_then(|by_read| by_read.get(&symbol))
            .into_iter()
            .flatten()
    }

    /// Destination states of all epsilon transitions out of `state`.
    pub fn epsilon_from<'a>(&'a self, state: &StateId) -> impl Iterator<Item = &'a StateId> + 'a {
        self.epsilon.get(state).into_iter().flatten()
    }

    /// Number of accepting states.
    pub fn final_count(&self) -> usize {
        self.finals.len()
    }

    /// Number of transitions the automaton was built from.
    pub fn transition_count(&self) -> usize {
        self.transition_count
    }
}

impl From<AutomatonSpec> for Automaton {
    fn from(spec: AutomatonSpec) -> Self {
        Self::new(spec.initial, spec.finals, spec.transitions)
    }
}
