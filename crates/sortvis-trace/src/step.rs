//! Step records: one semantically tagged event plus a full array snapshot.

/// Element type used by the visualizer.
///
/// Generators accept any `T: Ord + Clone`; the playback side works on
/// non-negative integers.
pub type Element = u32;

/// What happened at one step of a sort run.
///
/// Every index carried here is a valid position in the owning step's
/// `array_state`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[non_exhaustive]
pub enum StepKind<T = Element> {
    /// Two positions were compared
    Compare { indices: [usize; 2] },

    /// Two positions were exchanged (snapshot taken after the exchange)
    Swap { indices: [usize; 2] },

    /// A single position was written
    Overwrite {
        index: usize,
        value: T,
        /// Source position when the write is an insertion-sort shift
        shifted_from: Option<usize>,
    },

    /// A partition began with the pivot at `index`
    Pivot { index: usize },

    /// `index` holds its final value
    Sorted { index: usize },

    /// Selection sort started searching for the minimum of `index..`
    HighlightMinSearchStart { index: usize },

    /// Selection sort found a strictly smaller candidate
    HighlightNewMin { index: usize },

    /// Insertion sort picked the key at `index`
    HighlightKey { index: usize, key: T },

    /// Insertion sort compared `index` against the key and will shift it
    CompareShift {
        index: usize,
        key_index: usize,
        key: T,
    },

    /// Insertion sort placed the key at `index`
    Insert { index: usize, value: T },

    /// Heap sort examined the subtree rooted at `index`.
    ///
    /// Children are only present when they lie inside the logical heap.
    HeapifyNodeCheck {
        index: usize,
        left: Option<usize>,
        right: Option<usize>,
        heap_size: usize,
    },

    /// A kind this build does not know about (only produced by deserialization)
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl<T> StepKind<T> {
    /// Stable snake_case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Compare { .. } => "compare",
            StepKind::Swap { .. } => "swap",
            StepKind::Overwrite { .. } => "overwrite",
            StepKind::Pivot { .. } => "pivot",
            StepKind::Sorted { .. } => "sorted",
            StepKind::HighlightMinSearchStart { .. } => "highlight_min_search_start",
            StepKind::HighlightNewMin { .. } => "highlight_new_min",
            StepKind::HighlightKey { .. } => "highlight_key",
            StepKind::CompareShift { .. } => "compare_shift",
            StepKind::Insert { .. } => "insert",
            StepKind::HeapifyNodeCheck { .. } => "heapify_node_check",
            StepKind::Unknown => "unknown",
        }
    }

    /// Every index referenced by the payload.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            StepKind::Compare { indices } | StepKind::Swap { indices } => indices.to_vec(),
            StepKind::Overwrite { index, shifted_from, .. } => {
                let mut out = vec![*index];
                out.extend(*shifted_from);
                out
            }
            StepKind::Pivot { index }
            | StepKind::Sorted { index }
            | StepKind::HighlightMinSearchStart { index }
            | StepKind::HighlightNewMin { index }
            | StepKind::HighlightKey { index, .. }
            | StepKind::Insert { index, .. } => vec![*index],
            StepKind::CompareShift { index, key_index, .. } => vec![*index, *key_index],
            StepKind::HeapifyNodeCheck { index, left, right, .. } => {
                let mut out = vec![*index];
                out.extend(*left);
                out.extend(*right);
                out
            }
            StepKind::Unknown => Vec::new(),
        }
    }
}

/// One recorded event with an owned copy of the array at that instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<T = Element> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: StepKind<T>,
    pub array_state: Vec<T>,
}

impl<T> Step<T> {
    /// Create a step from a kind and a snapshot.
    pub fn new(kind: StepKind<T>, array_state: Vec<T>) -> Self {
        Self { kind, array_state }
    }

    /// Index of a `sorted` marker, if this is one.
    pub fn sorted_index(&self) -> Option<usize> {
        match self.kind {
            StepKind::Sorted { index } => Some(index),
            _ => None,
        }
    }

    /// Every index referenced by the payload.
    pub fn indices(&self) -> Vec<usize> {
        self.kind.indices()
    }

    /// Whether every payload index is a position in this step's snapshot.
    pub fn indices_valid(&self) -> bool {
        self.indices().iter().all(|&i| i < self.array_state.len())
    }
}
