//! Exchange sort (bubble sort) with early exit.

use crate::trace::{trivial, Recorder, Trace};

/// Record a bubble sort of `input`.
///
/// Each pass ends with a provisional `sorted` marker for the last position
/// it bubbled into place. A pass without swaps marks the untouched prefix
/// and stops.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    if input.len() <= 1 {
        return trivial(input);
    }

    let mut rec = Recorder::new(input);
    let n = rec.len();

    for pass in 0..n - 1 {
        let end = n - 1 - pass;
        let mut swapped = false;

        for j in 0..end {
            rec.compare(j, j + 1);
            if rec.array[j] > rec.array[j + 1] {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        rec.sorted(end);

        if !swapped {
            for k in 0..end {
                rec.sorted(k);
            }
            break;
        }
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Step, StepKind};

    fn kinds(trace: &Trace) -> Vec<StepKind> {
        trace.iter().map(|s| s.kind.clone()).collect()
    }

    #[test]
    fn three_one_two() {
        let trace = bubble_sort(&[3u32, 1, 2]);
        let steps = trace.steps();

        assert_eq!(steps[0], Step::new(StepKind::Compare { indices: [0, 1] }, vec![3, 1, 2]));
        assert_eq!(steps[1], Step::new(StepKind::Swap { indices: [0, 1] }, vec![1, 3, 2]));
        assert_eq!(steps[2], Step::new(StepKind::Compare { indices: [1, 2] }, vec![1, 3, 2]));
        assert_eq!(steps[3], Step::new(StepKind::Swap { indices: [1, 2] }, vec![1, 2, 3]));
        // The second pass still has to verify positions 0 and 1.
        assert_eq!(steps[4], Step::new(StepKind::Compare { indices: [0, 1] }, vec![1, 2, 3]));

        let tail: Vec<_> = steps[5..].to_vec();
        assert_eq!(
            tail,
            (0..3)
                .map(|index| Step::new(StepKind::Sorted { index }, vec![1, 2, 3]))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let trace = bubble_sort(&[1u32, 2, 3, 4]);
        let compares = kinds(&trace)
            .iter()
            .filter(|k| matches!(k, StepKind::Compare { .. }))
            .count();
        assert_eq!(compares, 3);
        assert!(!kinds(&trace).iter().any(|k| matches!(k, StepKind::Swap { .. })));
        assert_eq!(trace.sorted_markers(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn reversed_input_swaps_every_pair() {
        let trace = bubble_sort(&[4u32, 3, 2, 1]);
        let swaps = kinds(&trace)
            .iter()
            .filter(|k| matches!(k, StepKind::Swap { .. }))
            .count();
        assert_eq!(swaps, 6);
        assert_eq!(trace.final_state(), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    fn equal_elements_are_not_swapped() {
        let trace = bubble_sort(&[5u32, 5]);
        assert_eq!(trace.len(), 3);
        assert!(matches!(trace.steps()[0].kind, StepKind::Compare { .. }));
    }
}
