//! Injectable randomness for recipe generation.
//!
//! The generator never touches a global RNG. It asks a [`RandomSource`]
//! for permutations, so tests can script the exact draw and the CLI can
//! offer `--seed` for reproducible suggestions.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Produces index permutations.
pub trait RandomSource: Send {
    /// A permutation of `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

/// Permute `items` in place using `source`.
pub fn shuffle<T>(source: &mut dyn RandomSource, items: Vec<T>) -> Vec<T> {
    let order = source.permutation(items.len());
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|i| slots.get_mut(i).and_then(Option::take))
        .collect()
}

/// Uniform shuffles backed by [`StdRng`].
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from the OS-backed thread RNG.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Deterministic for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Replays pre-defined permutations in order, then falls back to identity.
///
/// Scripted entries that are not valid permutations of the requested length
/// are completed: out-of-range and repeated indices are dropped and the
/// missing ones appended in ascending order.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    script: VecDeque<Vec<usize>>,
}

impl ScriptedRandom {
    pub fn new(script: Vec<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Never reorders anything.
    pub fn identity() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedRandom {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let scripted = self.script.pop_front().unwrap_or_default();
        let mut seen = vec![false; len];
        let mut order = Vec::with_capacity(len);
        for i in scripted {
            if i < len && !seen[i] {
                seen[i] = true;
                order.push(i);
            }
        }
        order.extend((0..len).filter(|&i| !seen[i]));
        order
    }
}
