// State registry: insertion-ordered set of state identities with dense indices.

use std::hash::Hash;

use indexmap::IndexSet;

/// Assigns each distinct state a dense index in insertion order.
///
/// The index is the position in the underlying `IndexSet`; states are never
/// removed, so indices stay stable for the registry's lifetime.
#[derive(Debug, Clone)]
pub(crate) struct StateRegistry<S> {
    states: IndexSet<S>,
}

impl<S> Default for StateRegistry<S> {
    fn default() -> Self {
        Self {
            states: IndexSet::default(),
        }
    }
}

impl<S: Eq + Hash> StateRegistry<S> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            states: IndexSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Insert a new state and return its index, or `None` if an equal state
    /// is already registered (the registry is left unchanged).
    pub(crate) fn insert(&mut self, state: S) -> Option<usize> {
        let (index, inserted) = self.states.insert_full(state);
        inserted.then_some(index)
    }

    #[inline]
    pub(crate) fn index_of(&self, state: &S) -> Option<usize> {
        self.states.get_index_of(state)
    }

    /// The state at `index`. Indices come from this registry, so they are
    /// always in range.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> &S {
        &self.states[index]
    }

    #[inline]
    pub(crate) fn iter(&self) -> indexmap::set::Iter<'_, S> {
        self.states.iter()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
