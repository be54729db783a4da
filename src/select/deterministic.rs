//! Selection without replacement, pass after pass.

use crate::core::{Coder, Individual};
use crate::pipeline::Operator;
use rand::seq::SliceRandom;
use rand::RngCore;
use std::sync::Arc;

/// Hands out every member of the prior population exactly once per pass.
///
/// With shuffling enabled the population is reshuffled at the start of
/// every pass, including the first; otherwise members come out in
/// population order. Passes repeat indefinitely, so any number of pulls
/// succeeds.
///
/// This is the source stage of most pipelines: it has no provider.
pub struct DeterministicSelection<C: Coder, P> {
    shuffle: bool,
    pool: Vec<Arc<Individual<C, P>>>,
    cursor: usize,
}

impl<C: Coder, P> DeterministicSelection<C, P> {
    /// Creates a selection; `shuffle` controls reshuffling at each pass.
    pub fn new(shuffle: bool) -> Self {
        Self {
            shuffle,
            pool: Vec::new(),
            cursor: 0,
        }
    }

    /// Random order, reshuffled every pass.
    pub fn shuffled() -> Self {
        Self::new(true)
    }

    /// Population order, every pass.
    pub fn in_order() -> Self {
        Self::new(false)
    }
}

impl<C: Coder, P> Operator<C, P> for DeterministicSelection<C, P> {
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.pool = population.to_vec();
        self.cursor = 0;
        tracing::trace!(size = population.len(), "deterministic selection rebound");
    }

    /// # Panics
    /// Panics if the bound population is empty.
    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        assert!(!self.pool.is_empty(), "cannot select from empty population");
        if self.cursor == 0 && self.shuffle {
            self.pool.shuffle(rng);
        }
        let ind = Arc::clone(&self.pool[self.cursor]);
        self.cursor = (self.cursor + 1) % self.pool.len();
        ind
    }
}
