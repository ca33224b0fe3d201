// Arcs and the arc store, indexed by state in both directions.

use std::iter::FusedIterator;

use wfsa_core::Direction;

/// A directed, weighted arc.
///
/// Arcs are immutable once added and owned by their automaton. Besides the
/// two endpoint identities, an arc remembers their dense indices so that
/// traversal never has to hash a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc<S, W> {
    source: S,
    target: S,
    label: W,
    /// Dense endpoint indices: `[source, target]`.
    ends: [usize; 2],
}

impl<S, W> Arc<S, W> {
    pub(crate) fn new(source: S, target: S, label: W, ends: [usize; 2]) -> Self {
        Self {
            source,
            target,
            label,
            ends,
        }
    }

    /// The endpoint this arc leads to when followed in `direction`:
    /// the target for `Forward`, the source for `Backward`.
    #[inline]
    pub fn state(&self, direction: Direction) -> &S {
        match direction {
            Direction::Forward => &self.target,
            Direction::Backward => &self.source,
        }
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    pub fn target(&self) -> &S {
        &self.target
    }

    #[inline]
    pub fn label(&self) -> &W {
        &self.label
    }

    /// Dense index of the endpoint selected like [`state`](Self::state).
    #[inline]
    pub(crate) fn end(&self, direction: Direction) -> usize {
        match direction {
            Direction::Forward => self.ends[1],
            Direction::Backward => self.ends[0],
        }
    }
}

/// Storage for all arcs of an automaton.
///
/// Arcs live in one vector in insertion order. For every state, `on[0]`
/// lists the ids of its outgoing arcs and `on[1]` those of its incoming
/// arcs, each in the order the arcs were added.
#[derive(Debug, Clone)]
pub(crate) struct ArcStore<S, W> {
    arcs: Vec<Arc<S, W>>,
    on: [Vec<Vec<usize>>; 2],
}

impl<S, W> Default for ArcStore<S, W> {
    fn default() -> Self {
        Self {
            arcs: Vec::new(),
            on: [Vec::new(), Vec::new()],
        }
    }
}

impl<S, W> ArcStore<S, W> {
    pub(crate) fn with_capacity(states: usize, arcs: usize) -> Self {
        Self {
            arcs: Vec::with_capacity(arcs),
            on: [Vec::with_capacity(states), Vec::with_capacity(states)],
        }
    }

    /// Make room for one more state; must be called once per registered state.
    pub(crate) fn add_state(&mut self) {
        for lists in &mut self.on {
            lists.push(Vec::new());
        }
    }

    /// Append an arc whose endpoint indices have already been validated.
    pub(crate) fn push(&mut self, arc: Arc<S, W>) {
        let id = self.arcs.len();
        self.on[Direction::Forward.index()][arc.ends[0]].push(id);
        self.on[Direction::Backward.index()][arc.ends[1]].push(id);
        self.arcs.push(arc);
    }

    /// Arcs on `state`: outgoing for `Forward`, incoming for `Backward`.
    pub(crate) fn on(&self, direction: Direction, state: usize) -> ArcsOn<'_, S, W> {
        ArcsOn {
            arcs: &self.arcs,
            ids: self.on[direction.index()][state].iter(),
        }
    }

    /// The `position`-th arc on `state`, if there is one.
    #[inline]
    pub(crate) fn nth_on(&self, direction: Direction, state: usize, position: usize) -> Option<&Arc<S, W>> {
        self.on[direction.index()][state]
            .get(position)
            .map(|&id| &self.arcs[id])
    }

    #[inline]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Arc<S, W>> {
        self.arcs.iter()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.arcs.len()
    }
}

/// Iterator over the arcs on one state in one direction, in insertion order.
#[derive(Debug, Clone)]
pub struct ArcsOn<'a, S, W> {
    arcs: &'a [Arc<S, W>],
    ids: std::slice::Iter<'a, usize>,
}

impl<'a, S, W> Iterator for ArcsOn<'a, S, W> {
    type Item = &'a Arc<S, W>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| &self.arcs[id])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<S, W> DoubleEndedIterator for ArcsOn<'_, S, W> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| &self.arcs[id])
    }
}

impl<S, W> ExactSizeIterator for ArcsOn<'_, S, W> {}

impl<S, W> FusedIterator for ArcsOn<'_, S, W> {}
