//! Highlight categories and step interpretation.
//!
//! A rendered frame overlays three layers: the persistent sorted set
//! (lowest), the sticky outer pointer, then the step's own highlight. After
//! [`HighlightConfig::resolve`] every index belongs to at most one category,
//! chosen by [`Category`] precedence.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use sortvis_trace::{Element, Step, StepKind};

/// Highlight categories, declared in precedence order (earlier wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sorted,
    /// Selection sort's current outer index
    OuterPointer,
    Swap,
    NewMin,
    Compare,
    Pivot,
    Key,
    Overwrite,
    MinSearch,
    Heapify,
}

impl Category {
    /// Every category, highest precedence first.
    pub const ALL: [Category; 10] = [
        Category::Sorted,
        Category::OuterPointer,
        Category::Swap,
        Category::NewMin,
        Category::Compare,
        Category::Pivot,
        Category::Key,
        Category::Overwrite,
        Category::MinSearch,
        Category::Heapify,
    ];
}

/// Mapping from category to the indices it highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightConfig {
    sets: BTreeMap<Category, BTreeSet<usize>>,
}

impl HighlightConfig {
    /// An empty configuration (plain bars).
    pub fn new() -> Self {
        Self::default()
    }

    /// Every index in `0..len` marked sorted.
    pub fn all_sorted(len: usize) -> Self {
        let mut config = Self::new();
        config.mark_all(Category::Sorted, 0..len);
        config
    }

    /// Highlight `index` with `category`.
    pub fn mark(&mut self, category: Category, index: usize) {
        self.sets.entry(category).or_default().insert(index);
    }

    /// Highlight every index in `indices` with `category`.
    pub fn mark_all(&mut self, category: Category, indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            self.mark(category, index);
        }
    }

    /// Indices highlighted with `category`.
    pub fn indices(&self, category: Category) -> Vec<usize> {
        self.sets
            .get(&category)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Highest-precedence category highlighting `index`, if any.
    pub fn category_of(&self, index: usize) -> Option<Category> {
        self.sets
            .iter()
            .find(|(_, set)| set.contains(&index))
            .map(|(category, _)| *category)
    }

    /// Whether nothing is highlighted.
    pub fn is_plain(&self) -> bool {
        self.sets.values().all(BTreeSet::is_empty)
    }

    /// Iterate over non-empty categories in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<usize>)> {
        self.sets
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(category, set)| (*category, set))
    }

    /// Make categories mutually exclusive and drop out-of-range indices.
    ///
    /// Each index is kept only in its highest-precedence category.
    pub fn resolve(self, len: usize) -> Self {
        let mut claimed = BTreeSet::new();
        let mut sets = BTreeMap::new();

        for (category, indices) in self.sets {
            let kept: BTreeSet<usize> = indices
                .into_iter()
                .filter(|&i| i < len && claimed.insert(i))
                .collect();
            if !kept.is_empty() {
                sets.insert(category, kept);
            }
        }

        Self { sets }
    }
}

/// Highlight state that outlives a single step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marks {
    /// Indices confirmed sorted so far.
    pub sorted: BTreeSet<usize>,
    /// Selection sort's outer index, held until replaced or sorted.
    pub outer_pointer: Option<usize>,
}

impl Marks {
    /// Forget everything.
    pub fn clear(&mut self) {
        self.sorted.clear();
        self.outer_pointer = None;
    }
}

/// Apply `step` to the persistent marks and compute its highlight.
///
/// The result is unresolved; call [`HighlightConfig::resolve`] with the
/// snapshot length before rendering.
pub fn interpret(marks: &mut Marks, step: &Step<Element>) -> HighlightConfig {
    let mut own = HighlightConfig::new();

    match &step.kind {
        StepKind::Compare { indices } => own.mark_all(Category::Compare, *indices),
        StepKind::Swap { indices } => own.mark_all(Category::Swap, *indices),
        StepKind::Overwrite { index, .. } => own.mark(Category::Overwrite, *index),
        StepKind::Pivot { index } => own.mark(Category::Pivot, *index),
        StepKind::Sorted { index } => {
            marks.sorted.insert(*index);
            if marks.outer_pointer == Some(*index) {
                marks.outer_pointer = None;
            }
        }
        StepKind::HighlightMinSearchStart { index } => {
            marks.outer_pointer = Some(*index);
            own.mark(Category::MinSearch, *index);
        }
        StepKind::HighlightNewMin { index } => own.mark(Category::NewMin, *index),
        StepKind::HighlightKey { index, .. } => own.mark(Category::Key, *index),
        StepKind::CompareShift { index, key_index, .. } => {
            own.mark(Category::Compare, *index);
            own.mark(Category::Key, *key_index);
        }
        StepKind::Insert { index, .. } => own.mark(Category::Key, *index),
        StepKind::HeapifyNodeCheck {
            index, left, right, ..
        } => {
            own.mark(Category::Heapify, *index);
            own.mark_all(Category::Compare, left.iter().chain(right.iter()).copied());
        }
        other => {
            tracing::debug!(kind = other.name(), "no highlight for step kind");
        }
    }

    let mut config = HighlightConfig::new();
    config.mark_all(Category::Sorted, marks.sorted.iter().copied());
    if let Some(outer) = marks.outer_pointer {
        config.mark(Category::OuterPointer, outer);
    }
    for (category, indices) in own.sets {
        config.mark_all(category, indices);
    }
    config
}
