//! Injectable randomness for joke selection

use std::sync::{Mutex, PoisonError};

use rand::{seq::index, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws over index ranges.
///
/// Callers guarantee `len > 0` for [`RandomSource::pick_index`] and
/// `amount <= len` for [`RandomSource::sample_indices`].
pub trait RandomSource: Send + Sync {
    fn pick_index(&self, len: usize) -> usize;

    /// Draws `amount` distinct indices from `0..len`, in draw order.
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize>;
}

/// Thread-local generator per draw; holds no shared state.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        pick_with(&mut rand::thread_rng(), len)
    }

    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        sample_with(&mut rand::thread_rng(), len, amount)
    }
}

/// Reproducible generator. Draws are serialized through a mutex.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pick_with(&mut *rng, len)
    }

    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample_with(&mut *rng, len, amount)
    }
}

fn pick_with<R: RngCore>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}

fn sample_with<R: RngCore>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    index::sample(rng, len, amount).into_vec()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{RandomSource, SeededRandom, ThreadRandom};

    #[test]
    fn seeded_random_is_reproducible() {
        let first = SeededRandom::new(7);
        let second = SeededRandom::new(7);

        let a: Vec<usize> = (0..20).map(|_| first.pick_index(13)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.pick_index(13)).collect();
        assert_eq!(a, b);
        assert_eq!(first.sample_indices(13, 5), second.sample_indices(13, 5));
    }

    #[test]
    fn pick_index_stays_in_range() {
        let random = ThreadRandom::new();
        for _ in 0..500 {
            assert!(random.pick_index(3) < 3);
        }
    }

    #[test]
    fn sample_indices_are_distinct() {
        let random = SeededRandom::new(99);
        for amount in 1..=13 {
            let indices = random.sample_indices(13, amount);
            assert_eq!(indices.len(), amount);
            let unique: HashSet<usize> = indices.iter().copied().collect();
            assert_eq!(unique.len(), amount);
            assert!(indices.iter().all(|index| *index < 13));
        }
    }
}
