//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::trace::Trace;
use crate::{bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

/// The sorting algorithms that can produce a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Exchange sort
    Bubble,
    Selection,
    Insertion,
    Merge,
    /// Partition-exchange sort
    Quick,
    Heap,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Short selector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Run this algorithm's generator on `input`.
    pub fn generate<T: Ord + Clone>(&self, input: &[T]) -> Trace<T> {
        match self {
            Algorithm::Bubble => bubble_sort(input),
            Algorithm::Selection => selection_sort(input),
            Algorithm::Insertion => insertion_sort(input),
            Algorithm::Merge => merge_sort(input),
            Algorithm::Quick => quick_sort(input),
            Algorithm::Heap => heap_sort(input),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let algorithm = match normalized.as_str() {
            "bubble" | "bubble_sort" | "bubblesort" | "exchange" | "exchange_sort" => Algorithm::Bubble,
            "selection" | "selection_sort" => Algorithm::Selection,
            "insertion" | "insertion_sort" => Algorithm::Insertion,
            "merge" | "merge_sort" | "mergesort" => Algorithm::Merge,
            "quick" | "quick_sort" | "quicksort" | "partition_exchange" => Algorithm::Quick,
            "heap" | "heap_sort" | "heapsort" => Algorithm::Heap,
            _ => return Err(Error::UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}
