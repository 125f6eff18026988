//! Insertion sort with key, shift, and insert markers.

use crate::step::StepKind;
use crate::trace::{trivial, Recorder, Trace};

/// Record an insertion sort of `input`.
///
/// Only comparisons that cause a shift are recorded, as `compare_shift`.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    if input.len() <= 1 {
        return trivial(input);
    }

    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 1..n {
        let key = rec.array[i].clone();
        rec.record(StepKind::HighlightKey {
            index: i,
            key: key.clone(),
        });

        // `slot` is where the key would land if the scan stopped now.
        let mut slot = i;
        while slot > 0 && rec.array[slot - 1] > key {
            let j = slot - 1;
            rec.record(StepKind::CompareShift {
                index: j,
                key_index: i,
                key: key.clone(),
            });
            let shifted = rec.array[j].clone();
            rec.overwrite(slot, shifted, Some(j));
            slot = j;
        }

        rec.array[slot] = key.clone();
        rec.record(StepKind::Insert {
            index: slot,
            value: key,
        });
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn shifts_then_inserts() {
        let trace = insertion_sort(&[3u32, 1]);
        let expected = vec![
            Step::new(StepKind::HighlightKey { index: 1, key: 1 }, vec![3, 1]),
            Step::new(
                StepKind::CompareShift {
                    index: 0,
                    key_index: 1,
                    key: 1,
                },
                vec![3, 1],
            ),
            Step::new(
                StepKind::Overwrite {
                    index: 1,
                    value: 3,
                    shifted_from: Some(0),
                },
                vec![3, 3],
            ),
            Step::new(StepKind::Insert { index: 0, value: 1 }, vec![1, 3]),
            Step::new(StepKind::Sorted { index: 0 }, vec![1, 3]),
            Step::new(StepKind::Sorted { index: 1 }, vec![1, 3]),
        ];
        assert_eq!(trace.into_steps(), expected);
    }

    #[test]
    fn already_placed_key_inserts_in_place() {
        let trace = insertion_sort(&[1u32, 2]);
        assert_eq!(
            trace.steps()[1],
            Step::new(StepKind::Insert { index: 1, value: 2 }, vec![1, 2])
        );
    }

    #[test]
    fn insert_count_matches_passes() {
        let trace = insertion_sort(&[5u32, 4, 3, 2, 1]);
        let inserts = trace
            .iter()
            .filter(|s| matches!(s.kind, StepKind::Insert { .. }))
            .count();
        let shifts = trace
            .iter()
            .filter(|s| matches!(s.kind, StepKind::Overwrite { .. }))
            .count();
        assert_eq!(inserts, 4);
        assert_eq!(shifts, 10);
        assert_eq!(trace.final_state(), Some(&[1, 2, 3, 4, 5][..]));
    }
}
