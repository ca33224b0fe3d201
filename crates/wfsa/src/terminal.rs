// Terminal labels: per-state initial and final weights.

use indexmap::IndexMap;
use wfsa_core::{Direction, Semiring, Weight};

/// Initial (`Forward`) and final (`Backward`) labels, keyed by dense state
/// index.
///
/// Only non-Zero labels are stored. Each map keeps the order in which states
/// first received a label; overwriting keeps that position, setting Zero
/// removes the entry.
#[derive(Debug, Clone)]
pub(crate) struct TerminalLabels<W> {
    labels: [IndexMap<usize, Weight<W>>; 2],
}

impl<W> Default for TerminalLabels<W> {
    fn default() -> Self {
        Self {
            labels: [IndexMap::new(), IndexMap::new()],
        }
    }
}

impl<W: Semiring> TerminalLabels<W> {
    pub(crate) fn set(&mut self, direction: Direction, state: usize, weight: Weight<W>) {
        let labels = &mut self.labels[direction.index()];
        if weight.is_zero() {
            labels.shift_remove(&state);
        } else {
            labels.insert(state, weight);
        }
    }

    pub(crate) fn get(&self, direction: Direction, state: usize) -> Weight<W> {
        self.labels[direction.index()]
            .get(&state)
            .cloned()
            .unwrap_or(Weight::Zero)
    }

    pub(crate) fn iter(&self, direction: Direction) -> indexmap::map::Iter<'_, usize, Weight<W>> {
        self.labels[direction.index()].iter()
    }
}
