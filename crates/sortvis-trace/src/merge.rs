//! Top-down merge sort with compare and overwrite markers.

use crate::trace::{trivial, Recorder, Trace};

/// Record a merge sort of `input`.
///
/// Every write into the merged region is an `overwrite` whose snapshot
/// differs from the live array only at the written index.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    if input.len() <= 1 {
        return trivial(input);
    }

    let mut rec = Recorder::new(input);
    let last = rec.len() - 1;
    sort_range(&mut rec, 0, last);
    rec.finish()
}

fn sort_range<T: Ord + Clone>(rec: &mut Recorder<T>, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(rec, left, mid);
    sort_range(rec, mid + 1, right);
    merge(rec, left, mid, right);
}

fn merge<T: Ord + Clone>(rec: &mut Recorder<T>, left: usize, mid: usize, right: usize) {
    let lower: Vec<T> = rec.array[left..=mid].to_vec();
    let upper: Vec<T> = rec.array[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lower.len() && j < upper.len() {
        rec.compare(left + i, mid + 1 + j);
        // Ties take the lower half, which keeps the sort stable.
        if lower[i] <= upper[j] {
            rec.overwrite(k, lower[i].clone(), None);
            i += 1;
        } else {
            rec.overwrite(k, upper[j].clone(), None);
            j += 1;
        }
        k += 1;
    }

    for value in lower[i..].iter().chain(&upper[j..]) {
        rec.overwrite(k, value.clone(), None);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Step, StepKind};

    #[test]
    fn two_one() {
        let trace = merge_sort(&[2u32, 1]);
        let expected = vec![
            Step::new(StepKind::Compare { indices: [0, 1] }, vec![2, 1]),
            Step::new(
                StepKind::Overwrite {
                    index: 0,
                    value: 1,
                    shifted_from: None,
                },
                vec![1, 1],
            ),
            Step::new(
                StepKind::Overwrite {
                    index: 1,
                    value: 2,
                    shifted_from: None,
                },
                vec![1, 2],
            ),
            Step::new(StepKind::Sorted { index: 0 }, vec![1, 2]),
            Step::new(StepKind::Sorted { index: 1 }, vec![1, 2]),
        ];
        assert_eq!(trace.into_steps(), expected);
    }

    #[test]
    fn every_position_is_written_once_per_merge_level() {
        // Four elements: two merges of width 2 and one of width 4.
        let trace = merge_sort(&[4u32, 3, 2, 1]);
        let writes = trace
            .iter()
            .filter(|s| matches!(s.kind, StepKind::Overwrite { .. }))
            .count();
        assert_eq!(writes, 8);
        assert_eq!(trace.final_state(), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    fn overwrite_snapshot_reflects_single_write() {
        let trace = merge_sort(&[3u32, 1, 2]);
        let mut previous: Option<&Step> = None;
        for step in trace.iter() {
            if let (StepKind::Overwrite { index, value, .. }, Some(prev)) = (&step.kind, previous) {
                assert_eq!(step.array_state[*index], *value);
                let diffs = prev
                    .array_state
                    .iter()
                    .zip(&step.array_state)
                    .enumerate()
                    .filter(|(i, (a, b))| i != index && a != b)
                    .count();
                assert_eq!(diffs, 0);
            }
            previous = Some(step);
        }
    }
}
