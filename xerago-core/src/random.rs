use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniform choices. Injected wherever a request picks something
/// at random so tests can pin the outcome.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`; `None` when `len` is zero.
    fn pick_index(&self, len: usize) -> Option<usize>;
}

/// Thread-local entropy, the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..len))
    }
}

/// Deterministic source seeded once at startup.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Some(rng.gen_range(0..len))
    }
}

/// Pick one element of `items` uniformly.
pub fn pick<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    source.pick_index(items.len()).and_then(|idx| items.get(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_pick() {
        assert_eq!(ThreadRandom.pick_index(0), None);
        assert_eq!(SeededRandom::new(1).pick_index(0), None);
        let empty: [u8; 0] = [];
        assert!(pick(&ThreadRandom, &empty).is_none());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let left: Vec<_> = (0..20).map(|_| a.pick_index(7)).collect();
        let right: Vec<_> = (0..20).map(|_| b.pick_index(7)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_uniform_frequency() {
        let source = SeededRandom::new(7);
        let n = 4;
        let draws = 40_000;
        let mut counts = vec![0usize; n];
        for _ in 0..draws {
            counts[source.pick_index(n).unwrap()] += 1;
        }

        let expected = draws as f64 / n as f64;
        for count in counts {
            // 5% tolerance is far outside sampling noise at this size
            assert!((count as f64 - expected).abs() / expected < 0.05, "count {} too far from {}", count, expected);
        }
    }

    #[test]
    fn test_thread_random_in_range() {
        for _ in 0..100 {
            let idx = ThreadRandom.pick_index(3).unwrap();
            assert!(idx < 3);
        }
    }
}
