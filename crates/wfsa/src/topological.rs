// Topological order via Kahn's algorithm, with cycle detection.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use wfsa_core::{Direction, Semiring};

use crate::AutomatonError;
use crate::automaton::Automaton;

impl<S, W> Automaton<S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
    /// All states ordered so that every arc, followed in `direction`, leads
    /// from an earlier state to a later one.
    ///
    /// Among states that are ready at the same time, the one added first
    /// comes first, so the order is deterministic. Fails with
    /// [`AutomatonError::CycleDetected`] if the automaton has a cycle (a
    /// self-loop counts); no partial order is returned.
    pub fn topological_order(&self, direction: Direction) -> Result<Vec<&S>, AutomatonError> {
        let order = self.kahn_order(direction, None)?;
        Ok(order.into_iter().map(|index| self.states.get(index)).collect())
    }

    /// Kahn's algorithm over dense indices.
    ///
    /// With `within`, only the marked states take part and arcs leaving the
    /// marked set are ignored.
    pub(crate) fn kahn_order(
        &self,
        direction: Direction,
        within: Option<&[bool]>,
    ) -> Result<Vec<usize>, AutomatonError> {
        let count = self.state_count();
        let included = |index: usize| within.is_none_or(|mask| mask[index]);

        let mut in_degree = vec![0usize; count];
        let mut members = 0;
        for state in (0..count).filter(|&s| included(s)) {
            members += 1;
            for arc in self.arcs.on(direction, state) {
                let next = arc.end(direction);
                if included(next) {
                    in_degree[next] += 1;
                }
            }
        }

        let mut ready: BinaryHeap<Reverse<usize>> = (0..count)
            .filter(|&s| included(s) && in_degree[s] == 0)
            .map(Reverse)
            .collect();
        let mut done = vec![false; count];
        let mut order = Vec::with_capacity(members);

        while let Some(Reverse(state)) = ready.pop() {
            done[state] = true;
            order.push(state);
            for arc in self.arcs.on(direction, state) {
                let next = arc.end(direction);
                if !included(next) {
                    continue;
                }
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        if order.len() < members {
            let leftover = |index: usize| included(index) && !done[index];
            let state = self.state_on_cycle(direction, leftover);
            tracing::debug!(%direction, sorted = order.len(), members, "cycle detected");
            return Err(AutomatonError::cycle(self.states.get(state)));
        }

        tracing::debug!(%direction, states = order.len(), "topological order computed");
        Ok(order)
    }

    /// Find a state lying on a cycle among the states Kahn's algorithm could
    /// not place.
    ///
    /// Every such state still has a predecessor among them, so walking
    /// predecessors must eventually revisit a state, which is on a cycle.
    fn state_on_cycle(&self, direction: Direction, leftover: impl Fn(usize) -> bool) -> usize {
        let back = direction.opposite();
        let mut seen = vec![false; self.state_count()];
        let mut state = (0..self.state_count()).find(|&s| leftover(s)).unwrap_or_default();
        while !seen[state] {
            seen[state] = true;
            let predecessor = self
                .arcs
                .on(back, state)
                .map(|arc| arc.end(back))
                .find(|&p| leftover(p));
            match predecessor {
                Some(p) => state = p,
                None => break,
            }
        }
        state
    }
}
