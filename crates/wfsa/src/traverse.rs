// Depth-first traversal with an explicit stack, reported as a lazy event stream.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;

use wfsa_core::{Direction, Semiring};

use crate::AutomatonError;
use crate::automaton::Automaton;

/// What happened to a state at one step of a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalEvent {
    /// The state starts a new depth-first tree. `Visit` for the same state
    /// follows immediately.
    NewRoot,
    /// The state is discovered. Emitted exactly once per reached state.
    Visit,
    /// All arcs of the state have been followed. Emitted exactly once per
    /// reached state; in reverse, these form a topological order.
    FinishVisit,
    /// An arc led back to a state that is still being visited: the graph
    /// has a cycle through it.
    BackState,
    /// An arc led to a state whose visit has already finished.
    ForwardOrCrossState,
}

/// One element of a [`Traverse`] stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversedState<'a, S> {
    pub state: &'a S,
    pub event: TraversalEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitStatus {
    Unvisited,
    Visiting,
    Visited,
}

/// A state on the explicit DFS stack and how far through its arcs we are.
#[derive(Debug, Clone, Copy)]
struct Position {
    state: usize,
    visiting: bool,
    next_arc: usize,
}

impl Position {
    fn new(state: usize) -> Self {
        Self {
            state,
            visiting: false,
            next_arc: 0,
        }
    }
}

/// Lazy depth-first traversal of an automaton.
///
/// Roots are tried in order; each root that has not been reached yet starts
/// a new tree. Arcs are followed in the direction given, in insertion order.
/// The automaton is borrowed for the lifetime of the iterator, so it cannot
/// change underneath.
#[derive(Debug)]
pub struct Traverse<'a, S, W> {
    automaton: &'a Automaton<S, W>,
    direction: Direction,
    roots: std::vec::IntoIter<usize>,
    status: Vec<VisitStatus>,
    /// Stands in for the call stack of a recursive search.
    stack: Vec<Position>,
}

impl<'a, S, W> Traverse<'a, S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
    pub(crate) fn new(automaton: &'a Automaton<S, W>, direction: Direction, roots: Vec<usize>) -> Self {
        Self {
            automaton,
            direction,
            roots: roots.into_iter(),
            status: vec![VisitStatus::Unvisited; automaton.state_count()],
            stack: Vec::new(),
        }
    }

    /// Advance the search by one reportable step.
    fn step(&mut self) -> Option<(usize, TraversalEvent)> {
        if self.stack.is_empty() {
            loop {
                let root = self.roots.next()?;
                if self.status[root] == VisitStatus::Unvisited {
                    self.stack.push(Position::new(root));
                    return Some((root, TraversalEvent::NewRoot));
                }
            }
        }

        loop {
            let top = self.stack.last_mut()?;
            if !top.visiting {
                top.visiting = true;
                self.status[top.state] = VisitStatus::Visiting;
                return Some((top.state, TraversalEvent::Visit));
            }

            let Some(arc) = self.automaton.arcs.nth_on(self.direction, top.state, top.next_arc) else {
                let state = top.state;
                self.status[state] = VisitStatus::Visited;
                self.stack.pop();
                return Some((state, TraversalEvent::FinishVisit));
            };
            top.next_arc += 1;

            let next = arc.end(self.direction);
            match self.status[next] {
                VisitStatus::Unvisited => self.stack.push(Position::new(next)),
                VisitStatus::Visiting => return Some((next, TraversalEvent::BackState)),
                VisitStatus::Visited => return Some((next, TraversalEvent::ForwardOrCrossState)),
            }
        }
    }
}

impl<'a, S, W> Iterator for Traverse<'a, S, W>
where
    S: Clone + Eq + Hash + Debug,
    W: Semiring,
{
    type Item = TraversedState<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, event) = self.step()?;
        Some(TraversedState {
            state: self.automaton.states.get(index),
            event,
        })
    }
}

impl<S, W> FusedIterator for Traverse<'_, S, W>
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
    /// Depth-first traversal using every state as a potential root, in
    /// insertion order. Every state is visited exactly once.
    pub fn traverse(&self, direction: Direction) -> Traverse<'_, S, W> {
        Traverse::new(self, direction, (0..self.state_count()).collect())
    }

    /// Depth-first traversal from the given roots only, reaching exactly the
    /// states reachable from them in `direction`.
    ///
    /// Returns [`AutomatonError::UnknownState`] if a root is not in the
    /// automaton.
    pub fn traverse_from<I, Q>(&self, direction: Direction, roots: I) -> Result<Traverse<'_, S, W>, AutomatonError>
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<S>,
    {
        let roots = roots
            .into_iter()
            .map(|root| self.index(root.borrow()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Traverse::new(self, direction, roots))
    }

    /// Mark the states reachable from `roots` (dense indices).
    pub(crate) fn reachable(&self, direction: Direction, roots: Vec<usize>) -> Vec<bool> {
        let mut reached = vec![false; self.state_count()];
        let mut traversal = Traverse::new(self, direction, roots);
        while let Some((index, event)) = traversal.step() {
            if event == TraversalEvent::Visit {
                reached[index] = true;
            }
        }
        reached
    }
}
