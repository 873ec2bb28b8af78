//! Injected randomness for deterministic, testable generation
//!
//! Every stochastic choice in the crate flows through [`RandomSource`]: the
//! shuffle of ship lengths and the uniform pick among legal candidates. Tests
//! inject fixed sequences; the CLI injects a seeded [`SeededSource`].

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of floats in `[0, 1)`, the crate's sole randomness supply
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Adapter exposing any `FnMut() -> f64` closure as a source
///
/// Lets tests inject fixed sequences without a dedicated type.
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}

/// Seeded random source for reproducible generation
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// In-place Fisher-Yates shuffle
///
/// Walks `i` from `len - 1` down to 1, swapping element `i` with element
/// `floor(next_unit() * (i + 1))`. The computed index is clamped to `i` so a
/// source stepping outside `[0, 1)` cannot swap out of range; for conforming
/// sources the clamp never engages.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_unit() * (i as f64 + 1.0)) as usize;
        items.swap(i, j.min(i));
    }
}

/// Uniform selection from a slice
///
/// Returns `None` on an empty slice. Index choice is `floor(next_unit() *
/// len)`, clamped to the final element for out-of-contract sources.
pub fn choose<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = (rng.next_unit() * items.len() as f64) as usize;
    items.get(index).or_else(|| items.last())
}
