//! The operator protocol.

use crate::core::{Coder, Individual};
use rand::RngCore;
use std::sync::Arc;

/// A boxed, type-erased operator; the form in which providers are owned.
pub type BoxedOperator<C, P> = Box<dyn Operator<C, P>>;

/// One stage of a generation pipeline.
///
/// # Protocol
///
/// 1. [`begin_generation`](Operator::begin_generation) rebinds the operator
///    and, recursively, its provider to the new prior population and
///    discards any lazy state left from the previous generation.
/// 2. [`pull`](Operator::pull) returns the next individual. It must succeed
///    for any bounded number of calls; operators with finite production
///    (such as an elite set) fall through to their provider once drained.
///
/// Operators that modify an individual obtain exclusive access with
/// [`Arc::make_mut`], which copies the individual if anything else (the
/// prior population, another operator) still shares it.
pub trait Operator<C: Coder, P> {
    /// Binds the operator chain to the population of a new generation.
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]);

    /// Produces the next individual.
    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>>;
}

impl<C: Coder, P> Operator<C, P> for BoxedOperator<C, P> {
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        (**self).begin_generation(population);
    }

    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        (**self).pull(rng)
    }
}
