//! Weighted finite-state automata over arbitrary semirings.
//!
//! An [`Automaton`] is a mutable directed multigraph whose arcs carry
//! semiring values. States are opaque client-supplied identities; every
//! enumeration follows insertion order, so results are reproducible.
//!
//! # Architecture
//!
//! - [`automaton`] -- The automaton: states, arcs, terminal labels
//! - [`arc`] -- Arcs and the per-state arc index (both directions)
//! - [`traverse`] -- Lazy depth-first traversal with visit events
//! - [`topological`] -- Topological order with cycle detection
//! - [`shortest_distance`] -- Acyclic shortest distance (semiring relaxation)
//! - [`symbols`] -- AT&T symbol tables
//! - [`att`] -- AT&T text format reader
//! - [`config`] -- Reader configuration
//!
//! The semiring abstraction itself lives in `wfsa-core` and is re-exported
//! here.

pub mod arc;
pub mod att;
pub mod automaton;
pub mod config;
pub mod shortest_distance;
pub mod symbols;
pub mod topological;
pub mod traverse;

mod registry;
mod terminal;

pub use arc::{Arc, ArcsOn};
pub use att::{AttLabel, read_att, read_att_file};
pub use automaton::Automaton;
pub use config::AttConfig;
pub use shortest_distance::ShortestDistance;
pub use symbols::SymbolTable;
pub use traverse::{TraversalEvent, Traverse, TraversedState};
pub use wfsa_core::{Cost, Direction, Semiring, SemiringError, Sole, Viterbi, Weight};

/// Error type for automaton construction, queries and reading.
///
/// States are generic, so the offending state is carried as its `Debug`
/// rendering.
#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    #[error("state already exists: {0}")]
    DuplicateState(String),
    #[error("state not found: {0}")]
    UnknownState(String),
    #[error("automaton is not acyclic: state {state} lies on a cycle")]
    CycleDetected { state: String },
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AutomatonError {
    pub(crate) fn duplicate_state<S: std::fmt::Debug>(state: &S) -> Self {
        AutomatonError::DuplicateState(format!("{state:?}"))
    }

    pub(crate) fn unknown_state<S: std::fmt::Debug>(state: &S) -> Self {
        AutomatonError::UnknownState(format!("{state:?}"))
    }

    pub(crate) fn cycle<S: std::fmt::Debug>(state: &S) -> Self {
        AutomatonError::CycleDetected {
            state: format!("{state:?}"),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        AutomatonError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_state() {
        assert_eq!(
            AutomatonError::duplicate_state(&"a").to_string(),
            "state already exists: \"a\""
        );
        assert_eq!(AutomatonError::unknown_state(&7).to_string(), "state not found: 7");
        assert_eq!(
            AutomatonError::cycle(&(1, 2)).to_string(),
            "automaton is not acyclic: state (1, 2) lies on a cycle"
        );
    }

    #[test]
    fn parse_and_io_messages() {
        assert_eq!(
            AutomatonError::parse(3, "bad cost").to_string(),
            "parse error on line 3: bad cost"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = AutomatonError::from(io);
        assert!(matches!(error, AutomatonError::Io(_)));
        assert_eq!(error.to_string(), "no such file");
    }
}
