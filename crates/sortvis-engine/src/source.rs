//! Array sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortvis_trace::Element;

/// Produces the arrays the visualizer sorts.
pub trait ArraySource {
    /// An array of exactly `size` elements.
    fn generate(&mut self, size: usize) -> Vec<Element>;
}

impl<F> ArraySource for F
where
    F: FnMut(usize) -> Vec<Element>,
{
    fn generate(&mut self, size: usize) -> Vec<Element> {
        self(size)
    }
}

/// Uniform random values in `1..=max_value`; duplicates allowed.
#[derive(Debug, Clone)]
pub struct RandomArraySource {
    rng: StdRng,
    max_value: Element,
}

impl RandomArraySource {
    /// Source seeded from the operating system.
    pub fn new(max_value: Element) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_value: max_value.max(1),
        }
    }

    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64, max_value: Element) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_value: max_value.max(1),
        }
    }
}

impl ArraySource for RandomArraySource {
    fn generate(&mut self, size: usize) -> Vec<Element> {
        (0..size)
            .map(|_| self.rng.gen_range(1..=self.max_value))
            .collect()
    }
}
