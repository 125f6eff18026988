//! Sortvis Trace Generators
//!
//! Classic comparison sorts re-expressed as pure functions that return a
//! replayable log of steps instead of just sorting.
//!
//! # Steps
//!
//! Every [`Step`] carries a semantic [`StepKind`] (compare, swap, overwrite,
//! pivot, heapify check, ...) and an owned snapshot of the array at the
//! instant it was recorded. Replaying the snapshots in order shows the array
//! moving toward sorted order.
//!
//! # Consolidation
//!
//! Generators may mark positions `sorted` while they run. Those markers are
//! provisional: each generator finishes with one [`consolidate`] pass that
//! drops them and appends exactly one `sorted` step per index against the
//! final array.
//!
//! # Usage
//!
//! ```
//! use sortvis_trace::{Algorithm, StepKind};
//!
//! let trace = Algorithm::Bubble.generate(&[3u32, 1, 2]);
//! assert_eq!(trace.final_state(), Some(&[1, 2, 3][..]));
//! assert!(matches!(trace.steps()[0].kind, StepKind::Compare { indices: [0, 1] }));
//! ```

mod algorithm;
mod bubble;
mod error;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod step;
mod trace;

pub use algorithm::Algorithm;
pub use bubble::bubble_sort;
pub use error::{Error, Result};
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;
pub use step::{Element, Step, StepKind};
pub use trace::{consolidate, Trace};
