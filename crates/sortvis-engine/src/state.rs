//! Animation state: trace, step pointer, and persistent marks.

use sortvis_trace::{Element, Trace};

use crate::highlight::{interpret, HighlightConfig, Marks};

/// Mutable playback state for one visualization session.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    trace: Option<Trace>,
    pointer: usize,
    marks: Marks,
}

/// One interpreted step, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreted {
    pub snapshot: Vec<Element>,
    pub highlight: HighlightConfig,
}

impl AnimationState {
    /// Drop the trace and every mark; pointer back to zero.
    pub fn reset(&mut self) {
        self.trace = None;
        self.pointer = 0;
        self.marks.clear();
    }

    /// Reset, then load `trace` for playback from its first step.
    pub fn load(&mut self, trace: Trace) {
        self.reset();
        self.trace = Some(trace);
    }

    /// The loaded trace, if any.
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Index of the next step to interpret.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of steps in the loaded trace.
    pub fn total_steps(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    /// Whether every step has been interpreted.
    pub fn at_end(&self) -> bool {
        self.pointer >= self.total_steps()
    }

    /// Persistent marks accumulated so far.
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// Interpret the step at the pointer and advance past it.
    pub fn advance(&mut self) -> Option<Interpreted> {
        let step = self.trace.as_ref()?.get(self.pointer)?;
        let highlight = interpret(&mut self.marks, step).resolve(step.array_state.len());
        let snapshot = step.array_state.clone();
        self.pointer += 1;
        Some(Interpreted {
            snapshot,
            highlight,
        })
    }

    /// Rebuild marks by replaying steps `0..target` without rendering.
    ///
    /// Returns the last interpreted step, or `None` when `target` is zero.
    pub fn rewind_to(&mut self, target: usize) -> Option<Interpreted> {
        let target = target.min(self.total_steps());
        self.pointer = 0;
        self.marks.clear();

        let mut last = None;
        while self.pointer < target {
            last = self.advance();
        }
        last
    }

    /// Mark every index of the final array sorted and clear the sticky pointer.
    ///
    /// Returns the final frame, or `None` when no trace is loaded.
    pub fn finish(&mut self) -> Option<Interpreted> {
        let snapshot = self.trace.as_ref()?.final_state()?.to_vec();
        self.pointer = self.total_steps();
        self.marks.sorted = (0..snapshot.len()).collect();
        self.marks.outer_pointer = None;
        Some(Interpreted {
            highlight: HighlightConfig::all_sorted(snapshot.len()),
            snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Category;
    use sortvis_trace::Algorithm;

    fn loaded(input: &[Element]) -> AnimationState {
        let mut state = AnimationState::default();
        state.load(Algorithm::Selection.generate(input));
        state
    }

    #[test]
    fn advance_walks_the_trace() {
        let mut state = loaded(&[2, 1]);
        let total = state.total_steps();

        let first = state.advance().unwrap();
        assert_eq!(first.snapshot, vec![2, 1]);
        assert_eq!(first.highlight.category_of(0), Some(Category::OuterPointer));
        assert_eq!(state.pointer(), 1);

        while state.advance().is_some() {}
        assert_eq!(state.pointer(), total);
        assert!(state.at_end());
        assert_eq!(state.marks().sorted.len(), 2);
    }

    #[test]
    fn rewind_matches_straight_playback() {
        let mut straight = loaded(&[4, 3, 1, 2]);
        let mut frames = Vec::new();
        while let Some(frame) = straight.advance() {
            frames.push((frame, straight.marks().clone()));
        }

        let mut seeking = loaded(&[4, 3, 1, 2]);
        for (k, (frame, marks)) in frames.iter().enumerate().rev() {
            assert_eq!(seeking.rewind_to(k + 1).as_ref(), Some(frame));
            assert_eq!(seeking.marks(), marks);
            assert_eq!(seeking.pointer(), k + 1);
        }
        assert_eq!(seeking.rewind_to(0), None);
        assert_eq!(seeking.marks(), &Marks::default());
    }

    #[test]
    fn finish_marks_everything() {
        let mut state = loaded(&[3, 1, 2]);
        state.advance();
        let frame = state.finish().unwrap();
        assert_eq!(frame.snapshot, vec![1, 2, 3]);
        assert_eq!(frame.highlight.indices(Category::Sorted), vec![0, 1, 2]);
        assert!(state.at_end());
        assert_eq!(state.marks().outer_pointer, None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = loaded(&[3, 1, 2]);
        state.advance();
        state.reset();
        assert!(state.trace().is_none());
        assert_eq!(state.pointer(), 0);
        assert_eq!(state.marks(), &Marks::default());
    }
}
