//! Heap sort over a max-heap.

use crate::step::StepKind;
use crate::trace::{trivial, Recorder, Trace};

/// Record a heap sort of `input`.
pub fn heap_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    if input.len() <= 1 {
        return trivial(input);
    }

    let mut rec = Recorder::new(input);
    let n = rec.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut rec, n, root);
    }

    for end in (1..n).rev() {
        rec.swap(0, end);
        sift_down(&mut rec, end, 0);
    }

    rec.finish()
}

/// Restore the heap property for the subtree at `root` within `heap_size`.
fn sift_down<T: Ord + Clone>(rec: &mut Recorder<T>, heap_size: usize, root: usize) {
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let in_heap = |i: usize| (i < heap_size).then_some(i);

    rec.record(StepKind::HeapifyNodeCheck {
        index: root,
        left: in_heap(left),
        right: in_heap(right),
        heap_size,
    });

    let mut largest = root;
    if left < heap_size {
        rec.compare(left, largest);
        if rec.array[left] > rec.array[largest] {
            largest = left;
        }
    }
    if right < heap_size {
        rec.compare(right, largest);
        if rec.array[right] > rec.array[largest] {
            largest = right;
        }
    }

    if largest != root {
        rec.swap(root, largest);
        sift_down(rec, heap_size, largest);
    }
}
