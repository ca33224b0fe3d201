// Single- and multi-source shortest distance over acyclic subgraphs.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use wfsa_core::{Direction, Semiring};

use crate::AutomatonError;
use crate::automaton::Automaton;

/// Lazy stream of `(state, distance)` pairs in topological order.
///
/// Produced by [`Automaton::shortest_distance_acyclic`]. The reachable
/// subgraph has already been checked for cycles when this value exists, so
/// iteration itself cannot fail. Dropping it early is fine.
#[derive(Debug)]
pub struct ShortestDistance<'a, S, W> {
    automaton: &'a Automaton<S, W>,
    direction: Direction,
    order: std::vec::IntoIter<usize>,
    /// Distances accumulated so far for states not yet emitted.
    distances: HashMap<usize, W>,
}

impl<S, W> ShortestDistance<'_, S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
    /// Push `distance` of `state` along all its arcs.
    fn relax(&mut self, state: usize, distance: &W) {
        let automaton = self.automaton;
        for arc in automaton.arcs.on(self.direction, state) {
            // Keep the product in path order whichever way we walk.
            let value = match self.direction {
                Direction::Forward => distance.times(arc.label()),
                Direction::Backward => arc.label().times(distance),
            };
            match self.distances.entry(arc.end(self.direction)) {
                Entry::Occupied(mut entry) => {
                    let combined = entry.get().plus(&value);
                    entry.insert(combined);
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
    }
}

impl<'a, S, W> Iterator for ShortestDistance<'a, S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
    type Item = (&'a S, W);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let state = self.order.next()?;
            let Some(distance) = self.distances.remove(&state) else {
                continue;
            };
            self.relax(state, &distance);
            return Some((self.automaton.states.get(state), distance));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.order.len()))
    }
}

impl<S, W> FusedIterator for ShortestDistance<'_, S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
}

impl<S, W> Automaton<S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
    /// Shortest distance from a single state, starting with One.
    ///
    /// See [`shortest_distance_acyclic`](Self::shortest_distance_acyclic).
    pub fn shortest_distance_acyclic_from(
        &self,
        source: &S,
        direction: Direction,
    ) -> Result<ShortestDistance<'_, S, W>, AutomatonError> {
        self.shortest_distance_acyclic([(source, W::one())], direction)
    }

    /// Shortest distance from several weighted sources.
    ///
    /// `initial` is consumed exactly once. A state listed more than once
    /// starts with the sum of its values. The states reachable from the
    /// sources in `direction` are sorted topologically and relaxed in that
    /// order; every reachable state is yielded once with the sum over all
    /// paths of the path products, and unreachable states are left out.
    ///
    /// Fails before yielding anything with [`AutomatonError::UnknownState`]
    /// for an unknown source or [`AutomatonError::CycleDetected`] if the
    /// reachable part is cyclic. Cycles elsewhere do not matter.
    pub fn shortest_distance_acyclic<I, K>(
        &self,
        initial: I,
        direction: Direction,
    ) -> Result<ShortestDistance<'_, S, W>, AutomatonError>
    where
        I: IntoIterator<Item = (K, W)>,
        K: Borrow<S>,
    {
        let mut distances: HashMap<usize, W> = HashMap::new();
        let mut roots = Vec::new();
        for (state, value) in initial {
            let index = self.index(state.borrow())?;
            match distances.entry(index) {
                Entry::Occupied(mut entry) => {
                    let combined = entry.get().plus(&value);
                    entry.insert(combined);
                }
                Entry::Vacant(entry) => {
                    roots.push(index);
                    entry.insert(value);
                }
            }
        }

        let sources = roots.len();
        let reachable = self.reachable(direction, roots);
        let order = self.kahn_order(direction, Some(reachable.as_slice()))?;
        tracing::debug!(%direction, sources, reachable = order.len(), "shortest distance started");

        Ok(ShortestDistance {
            automaton: self,
            direction,
            order: order.into_iter(),
            distances,
        })
    }
}
