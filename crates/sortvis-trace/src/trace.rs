//! Trace container, step recording, and terminal consolidation.

use crate::step::{Element, Step, StepKind};

/// Ordered, immutable sequence of steps from one sort run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace<T = Element> {
    steps: Vec<Step<T>>,
}

impl<T> Trace<T> {
    /// Wrap an already-ordered list of steps.
    pub fn from_steps(steps: Vec<Step<T>>) -> Self {
        Self { steps }
    }

    /// All steps in chronological order.
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Step<T>> {
        self.steps.get(index)
    }

    /// Snapshot of the last step (the sorted array), if any.
    pub fn final_state(&self) -> Option<&[T]> {
        self.steps.last().map(|s| s.array_state.as_slice())
    }

    /// Indices of every `sorted` marker, in trace order.
    pub fn sorted_markers(&self) -> Vec<usize> {
        self.steps.iter().filter_map(Step::sorted_index).collect()
    }

    /// Iterate over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    /// Consume the trace, returning its steps.
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Step<T>;
    type IntoIter = std::slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Working buffer plus step log for one generator run.
///
/// The recorder owns the only mutable copy of the array; every recorded
/// step clones it, so snapshots never alias the live buffer.
pub(crate) struct Recorder<T> {
    pub(crate) array: Vec<T>,
    steps: Vec<Step<T>>,
}

impl<T: Ord + Clone> Recorder<T> {
    pub(crate) fn new(input: &[T]) -> Self {
        Self {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    /// Record a step against the current array.
    pub(crate) fn record(&mut self, kind: StepKind<T>) {
        self.steps.push(Step::new(kind, self.array.clone()));
    }

    pub(crate) fn compare(&mut self, a: usize, b: usize) {
        self.record(StepKind::Compare { indices: [a, b] });
    }

    /// Exchange two positions and record the result.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.record(StepKind::Swap { indices: [a, b] });
    }

    /// Write one position and record the result.
    pub(crate) fn overwrite(&mut self, index: usize, value: T, shifted_from: Option<usize>) {
        self.array[index] = value.clone();
        self.record(StepKind::Overwrite {
            index,
            value,
            shifted_from,
        });
    }

    /// Provisional marker, superseded by [`consolidate`].
    pub(crate) fn sorted(&mut self, index: usize) {
        self.record(StepKind::Sorted { index });
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    /// Apply the terminal consolidation pass and return the trace.
    pub(crate) fn finish(self) -> Trace<T> {
        consolidate(self.steps, &self.array)
    }
}

/// Trace for inputs of length 0 or 1: one `sorted` step per element.
pub(crate) fn trivial<T: Clone>(input: &[T]) -> Trace<T> {
    let steps = (0..input.len())
        .map(|index| Step::new(StepKind::Sorted { index }, input.to_vec()))
        .collect();
    Trace::from_steps(steps)
}

/// Replace provisional `sorted` markers with exactly one per index.
///
/// Drops every `sorted` step in `steps`, then appends `sorted(k)` for each
/// `k in 0..final_state.len()`, all carrying `final_state`.
pub fn consolidate<T: Clone>(steps: Vec<Step<T>>, final_state: &[T]) -> Trace<T> {
    let mut steps: Vec<Step<T>> = steps
        .into_iter()
        .filter(|s| s.sorted_index().is_none())
        .collect();
    steps.reserve(final_state.len());
    for index in 0..final_state.len() {
        steps.push(Step::new(StepKind::Sorted { index }, final_state.to_vec()));
    }
    Trace::from_steps(steps)
}
