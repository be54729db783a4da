//! Pass-through operators: cloning and evaluation.

use super::types::{BoxedOperator, Operator};
use crate::core::{Coder, Individual, Problem};
use rand::RngCore;
use std::sync::Arc;

/// Replaces each pulled individual with an independent copy.
///
/// Parents coming out of selection are still members of the prior
/// population; placing a `CloneOp` right after selection makes the
/// offspring's genome copy explicit (through
/// [`Coder::copy_genome`]) and lets every downstream variation operator
/// modify it without a further copy.
pub struct CloneOp<C: Coder, P> {
    provider: BoxedOperator<C, P>,
}

impl<C: Coder + 'static, P: 'static> CloneOp<C, P> {
    /// Wraps `provider`.
    pub fn new(provider: impl Operator<C, P> + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }
}

impl<C: Coder, P> Operator<C, P> for CloneOp<C, P> {
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.provider.begin_generation(population);
    }

    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let parent = self.provider.pull(rng);
        Arc::new(Individual::clone(&parent))
    }
}

/// Computes the fitness of each individual as it passes through.
///
/// Evaluation is often the expensive step, so it is a stage of its own:
/// it runs exactly once per offspring, after all variation.
pub struct Evaluate<C: Coder, P> {
    provider: BoxedOperator<C, P>,
}

impl<C: Coder + 'static, P: 'static> Evaluate<C, P> {
    /// Wraps `provider`.
    pub fn new(provider: impl Operator<C, P> + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }
}

impl<C, P> Operator<C, P> for Evaluate<C, P>
where
    C: Coder,
    P: Problem<C::Phenome>,
{
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.provider.begin_generation(population);
    }

    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let mut ind = self.provider.pull(rng);
        Arc::make_mut(&mut ind).evaluate(rng);
        ind
    }
}
