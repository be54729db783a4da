//! Elitism.

use crate::core::{Coder, Individual, Problem};
use crate::pipeline::{BoxedOperator, Operator};
use crate::select::{rank_top, Comparator, FitnessOrder};
use rand::RngCore;
use std::collections::VecDeque;
use std::sync::Arc;

/// Carries the best `num_elite` members of the prior population into the
/// next one unchanged.
///
/// The prior population is captured at
/// [`begin_generation`](Operator::begin_generation). The first `num_elite`
/// pulls of a generation return its elites, best first, each exactly once;
/// every later pull is delegated to the provider. Elites are shared with
/// the prior population, not copied.
///
/// Place it at the downstream end of the pipeline so that the elites count
/// toward the population size.
pub struct Elitism<C: Coder, P> {
    provider: BoxedOperator<C, P>,
    num_elite: usize,
    comparator: Box<dyn Comparator<C, P>>,
    prior: Vec<Arc<Individual<C, P>>>,
    elites: Option<VecDeque<Arc<Individual<C, P>>>>,
}

impl<C, P> Elitism<C, P>
where
    C: Coder + 'static,
    P: Problem<C::Phenome> + 'static,
{
    /// Wraps `provider`, keeping `num_elite` elites under [`FitnessOrder`].
    ///
    /// `num_elite == 0` makes the operator a pass-through.
    pub fn new(provider: impl Operator<C, P> + 'static, num_elite: usize) -> Self {
        Self {
            provider: Box::new(provider),
            num_elite,
            comparator: Box::new(FitnessOrder),
            prior: Vec::new(),
            elites: None,
        }
    }
}

impl<C: Coder, P> Elitism<C, P> {
    /// Replaces the comparator used to rank elites.
    pub fn with_comparator(mut self, comparator: impl Comparator<C, P> + 'static) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Number of elites kept per generation.
    pub fn num_elite(&self) -> usize {
        self.num_elite
    }
}

impl<C: Coder, P> Operator<C, P> for Elitism<C, P> {
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.prior = population.to_vec();
        self.elites = None;
        self.provider.begin_generation(population);
    }

    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let num_elite = self.num_elite;
        let comparator = &*self.comparator;
        let prior = &mut self.prior;
        let elites = self.elites.get_or_insert_with(|| {
            let ranked = rank_top(std::mem::take(prior), num_elite, comparator, &mut *rng);
            tracing::trace!(elites = ranked.len(), "elites ranked");
            ranked.into()
        });
        if let Some(elite) = elites.pop_front() {
            return elite;
        }
        self.provider.pull(rng)
    }
}
