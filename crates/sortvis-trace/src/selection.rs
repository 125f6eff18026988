//! Selection sort with min-search markers.

use crate::step::StepKind;
use crate::trace::{trivial, Recorder, Trace};

/// Record a selection sort of `input`.
pub fn selection_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    if input.len() <= 1 {
        return trivial(input);
    }

    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 0..n - 1 {
        let mut min = i;
        rec.record(StepKind::HighlightMinSearchStart { index: i });

        for j in i + 1..n {
            rec.compare(j, min);
            if rec.array[j] < rec.array[min] {
                min = j;
                rec.record(StepKind::HighlightNewMin { index: min });
            }
        }

        if min != i {
            rec.swap(i, min);
        }
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn two_one() {
        let trace = selection_sort(&[2u32, 1]);
        let expected = vec![
            Step::new(StepKind::HighlightMinSearchStart { index: 0 }, vec![2, 1]),
            Step::new(StepKind::Compare { indices: [1, 0] }, vec![2, 1]),
            Step::new(StepKind::HighlightNewMin { index: 1 }, vec![2, 1]),
            Step::new(StepKind::Swap { indices: [0, 1] }, vec![1, 2]),
            Step::new(StepKind::Sorted { index: 0 }, vec![1, 2]),
            Step::new(StepKind::Sorted { index: 1 }, vec![1, 2]),
        ];
        assert_eq!(trace.into_steps(), expected);
    }

    #[test]
    fn ties_do_not_move_the_minimum() {
        let trace = selection_sort(&[1u32, 1, 1]);
        assert!(!trace
            .iter()
            .any(|s| matches!(s.kind, StepKind::HighlightNewMin { .. } | StepKind::Swap { .. })));
    }

    #[test]
    fn one_search_start_per_outer_position() {
        let trace = selection_sort(&[4u32, 2, 3, 1]);
        let starts: Vec<_> = trace
            .iter()
            .filter_map(|s| match s.kind {
                StepKind::HighlightMinSearchStart { index } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(starts, vec![0, 1, 2]);
        assert_eq!(trace.final_state(), Some(&[1, 2, 3, 4][..]));
    }
}
