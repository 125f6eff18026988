//! Partition-exchange sort (quicksort, Lomuto partition).

use crate::step::StepKind;
use crate::trace::{trivial, Recorder, Trace};

/// Record a quicksort of `input`.
///
/// The pivot is always the last element of the active range. Pivot
/// placements and single-element ranges get provisional `sorted` markers.
pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    if input.len() <= 1 {
        return trivial(input);
    }

    let mut rec = Recorder::new(input);
    let last = rec.len() - 1;
    sort_range(&mut rec, 0, last);
    rec.finish()
}

fn sort_range<T: Ord + Clone>(rec: &mut Recorder<T>, low: usize, high: usize) {
    if low < high {
        let pivot = partition(rec, low, high);
        if pivot > low {
            sort_range(rec, low, pivot - 1);
        }
        sort_range(rec, pivot + 1, high);
    } else if low == high {
        rec.sorted(low);
    }
}

fn partition<T: Ord + Clone>(rec: &mut Recorder<T>, low: usize, high: usize) -> usize {
    let pivot_value = rec.array[high].clone();
    rec.record(StepKind::Pivot { index: high });

    // Everything left of `store` is smaller than the pivot.
    let mut store = low;
    for j in low..high {
        rec.compare(j, high);
        if rec.array[j] < pivot_value {
            rec.swap(store, j);
            store += 1;
        }
    }

    rec.swap(store, high);
    rec.sorted(store);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn two_one() {
        let trace = quick_sort(&[2u32, 1]);
        let expected = vec![
            Step::new(StepKind::Pivot { index: 1 }, vec![2, 1]),
            Step::new(StepKind::Compare { indices: [0, 1] }, vec![2, 1]),
            Step::new(StepKind::Swap { indices: [0, 1] }, vec![1, 2]),
            Step::new(StepKind::Sorted { index: 0 }, vec![1, 2]),
            Step::new(StepKind::Sorted { index: 1 }, vec![1, 2]),
        ];
        assert_eq!(trace.into_steps(), expected);
    }

    #[test]
    fn pivot_is_last_of_each_range() {
        let trace = quick_sort(&[3u32, 7, 1, 5]);
        let pivots: Vec<_> = trace
            .iter()
            .filter_map(|s| match s.kind {
                StepKind::Pivot { index } => Some((index, s.array_state[index])),
                _ => None,
            })
            .collect();
        assert_eq!(pivots.first(), Some(&(3, 5)));
        assert_eq!(trace.final_state(), Some(&[1, 3, 5, 7][..]));
    }

    #[test]
    fn compares_always_target_the_pivot() {
        let trace = quick_sort(&[9u32, 4, 6, 2, 8]);
        let mut pivot = None;
        for step in trace.iter() {
            match step.kind {
                StepKind::Pivot { index } => pivot = Some(index),
                StepKind::Compare { indices } => assert_eq!(Some(indices[1]), pivot),
                _ => {}
            }
        }
    }

    #[test]
    fn duplicates_sort() {
        let trace = quick_sort(&[2u32, 2, 1, 2]);
        assert_eq!(trace.final_state(), Some(&[1, 2, 2, 2][..]));
        assert_eq!(trace.sorted_markers(), vec![0, 1, 2, 3]);
    }
}
