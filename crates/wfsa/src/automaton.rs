// Explicit automaton: states, arcs and terminal labels.

use std::fmt::Debug;
use std::hash::Hash;

use wfsa_core::{Direction, Semiring, Weight};

use crate::AutomatonError;
use crate::arc::{Arc, ArcStore, ArcsOn};
use crate::registry::StateRegistry;
use crate::terminal::TerminalLabels;

/// An automaton that stores its states and arcs explicitly.
///
/// States are client-supplied identities compared with `Eq`/`Hash`; the
/// automaton never orders them. States, arcs on a state, and terminal states
/// are all enumerated in insertion order. Nothing is ever removed, apart from
/// terminal labels that are reset to Zero.
///
/// Queries take `&self` and may run concurrently from several threads as long
/// as nobody mutates the automaton meanwhile; the automaton does no locking of
/// its own.
#[derive(Debug, Clone)]
pub struct Automaton<S, W> {
    pub(crate) states: StateRegistry<S>,
    pub(crate) arcs: ArcStore<S, W>,
    pub(crate) terminals: TerminalLabels<W>,
}

impl<S, W> Default for Automaton<S, W> {
    fn default() -> Self {
        Self {
            states: StateRegistry::default(),
            arcs: ArcStore::default(),
            terminals: TerminalLabels::default(),
        }
    }
}

impl<S, W> Automaton<S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
    /// Create an empty automaton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty automaton with room for `states` states and `arcs` arcs.
    pub fn with_capacity(states: usize, arcs: usize) -> Self {
        Self {
            states: StateRegistry::with_capacity(states),
            arcs: ArcStore::with_capacity(states, arcs),
            terminals: TerminalLabels::default(),
        }
    }

    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Add a new state.
    ///
    /// Returns [`AutomatonError::DuplicateState`] if an equal state exists;
    /// the automaton is then unchanged.
    pub fn add_state(&mut self, state: S) -> Result<(), AutomatonError> {
        if self.states.contains(&state) {
            return Err(AutomatonError::duplicate_state(&state));
        }
        let index = self.states.insert(state);
        self.arcs.add_state();
        tracing::trace!(?index, "state added");
        Ok(())
    }

    /// All states in insertion order.
    pub fn states(&self) -> impl ExactSizeIterator<Item = &S> + DoubleEndedIterator + '_ {
        self.states.iter()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Add an arc from `source` to `target`.
    ///
    /// Parallel arcs are allowed. Returns [`AutomatonError::UnknownState`] if
    /// either endpoint is not in the automaton.
    pub fn add_arc(&mut self, source: &S, target: &S, label: W) -> Result<(), AutomatonError> {
        let from = self.index(source)?;
        let to = self.index(target)?;
        self.arcs
            .push(Arc::new(source.clone(), target.clone(), label, [from, to]));
        tracing::trace!(source = from, target = to, "arc added");
        Ok(())
    }

    /// Arcs on `state`, in the order they were added: outgoing arcs for
    /// `Forward`, incoming arcs for `Backward`.
    pub fn arcs_on(&self, direction: Direction, state: &S) -> Result<ArcsOn<'_, S, W>, AutomatonError> {
        let index = self.index(state)?;
        Ok(self.arcs.on(direction, index))
    }

    /// Set the initial (`Forward`) or final (`Backward`) label of a state.
    ///
    /// A label equal to Zero removes the state from
    /// [`terminal_states`](Self::terminal_states); otherwise any previous label
    /// is replaced in place.
    pub fn set_terminal_label(
        &mut self,
        direction: Direction,
        state: &S,
        label: impl Into<Weight<W>>,
    ) -> Result<(), AutomatonError> {
        let index = self.index(state)?;
        self.terminals.set(direction, index, label.into());
        Ok(())
    }

    /// The initial or final label of a state; Zero if it was never set.
    pub fn terminal_label(&self, direction: Direction, state: &S) -> Result<Weight<W>, AutomatonError> {
        let index = self.index(state)?;
        Ok(self.terminals.get(direction, index))
    }

    /// States with a non-Zero initial (`Forward`) or final (`Backward`)
    /// label, in the order their labels were first set.
    pub fn terminal_states(&self, direction: Direction) -> impl ExactSizeIterator<Item = (&S, &Weight<W>)> + '_ {
        self.terminals
            .iter(direction)
            .map(|(&index, weight)| (self.states.get(index), weight))
    }

    /// Copy the automaton, passing every concrete label through `f`.
    ///
    /// States, arc order and terminal-label order are preserved. Zero and
    /// One markers on terminal labels stay markers.
    pub fn map_labels<V, F>(&self, mut f: F) -> Automaton<S, V>
    where
        V: Semiring,
        F: FnMut(&W) -> V,
    {
        let mut result = Automaton::with_capacity(self.state_count(), self.arc_count());
        for state in self.states.iter() {
            result.states.insert(state.clone());
            result.arcs.add_state();
        }
        for arc in self.arcs.iter() {
            result.arcs.push(Arc::new(
                arc.source().clone(),
                arc.target().clone(),
                f(arc.label()),
                [arc.end(Direction::Backward), arc.end(Direction::Forward)],
            ));
        }
        for direction in Direction::ALL {
            for (&index, weight) in self.terminals.iter(direction) {
                let mapped = weight.clone().map(|value| f(&value));
                result.terminals.set(direction, index, mapped);
            }
        }
        result
    }

    /// Dense index of a state, or [`AutomatonError::UnknownState`].
    pub(crate) fn index(&self, state: &S) -> Result<usize, AutomatonError> {
        self.states
            .index_of(state)
            .ok_or_else(|| AutomatonError::unknown_state(state))
    }
}
