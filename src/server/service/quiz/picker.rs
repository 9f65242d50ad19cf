//! Random source for quiz question selection.
//!
//! The picker owns a seedable generator so the uniform draw over candidates can be
//! made repeatable in tests. Clones share the same generator.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub struct QuestionPicker {
    rng: Arc<Mutex<StdRng>>,
}

impl QuestionPicker {
    /// Creates a picker seeded from the operating system's entropy source.
    pub fn from_os_rng() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a picker with a fixed seed; equal seeds produce equal draws.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Removes and returns one candidate chosen uniformly at random.
    ///
    /// # Returns
    /// - `Some(T)` - The chosen candidate
    /// - `None` - `candidates` was empty
    pub fn pick<T>(&self, mut candidates: Vec<T>) -> Option<T> {
        if candidates.is_empty() {
            return None;
        }

        // A poisoned lock still holds a usable generator.
        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..candidates.len());

        Some(candidates.swap_remove(index))
    }
}
