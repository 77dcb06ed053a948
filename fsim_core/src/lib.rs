//! Finite-automaton simulation core.
//!
//! This library decides whether an input string is accepted by a finite
//! automaton with nondeterministic transitions and epsilon transitions:
//! 1. **Model**: immutable [`Automaton`] aggregate with indexed transition
//!    lookup (built once, read-only afterwards)
//! 2. **Engine**: epsilon-closure + subset stepping over the input,
//!    producing an accept/reject verdict
//!
//! The engine is total and stateless: unknown states degrade to empty
//! transition sets rather than errors, and nothing is shared between
//! `simulate` calls, so one `Automaton` can serve many callers (or threads)
//! at once.

pub mod automaton;
pub mod engine;

// Re-export key types for convenience
pub use automaton::{Automaton, AutomatonSpec, StateId, Transition};
pub use engine::{epsilon_closure, simulate};
