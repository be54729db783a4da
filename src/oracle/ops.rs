//! Pipeline adapters at both ends of an ask/tell oracle.

use super::types::{AskTellOracle, SharedOracle};
use crate::core::{Coder, Individual, Problem};
use crate::pipeline::{BoxedOperator, Operator};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::sync::Arc;

/// Hands out a fixed batch indefinitely: first pass in batch order, then
/// reshuffled before each further pass.
struct Republish<T> {
    items: Vec<T>,
    cursor: usize,
    passes: usize,
}

impl<T: Clone> Republish<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            passes: 0,
        }
    }

    fn next(&mut self, rng: &mut dyn RngCore) -> T {
        if self.cursor == 0 && self.passes > 0 {
            self.items.shuffle(rng);
        }
        let item = self.items[self.cursor].clone();
        self.cursor += 1;
        if self.cursor == self.items.len() {
            self.cursor = 0;
            self.passes += 1;
        }
        item
    }
}

/// Pipeline source that asks an oracle for one batch per generation.
///
/// The ask happens on the first pull after
/// [`begin_generation`](Operator::begin_generation); the prior population
/// is ignored. Candidates come out unevaluated.
pub struct Generate<C: Coder, P, O> {
    oracle: SharedOracle<O>,
    problem: Arc<P>,
    coder: Arc<C>,
    batch: Option<Republish<Arc<Individual<C, P>>>>,
}

impl<C: Coder, P, O> Generate<C, P, O> {
    /// Creates a source building individuals for `problem` with `coder`.
    pub fn new(oracle: SharedOracle<O>, problem: Arc<P>, coder: Arc<C>) -> Self {
        Self {
            oracle,
            problem,
            coder,
            batch: None,
        }
    }
}

impl<C, P, O> Operator<C, P> for Generate<C, P, O>
where
    C: Coder,
    P: Problem<C::Phenome>,
    O: AskTellOracle<Genome = C::Genome>,
{
    fn begin_generation(&mut self, _population: &[Arc<Individual<C, P>>]) {
        self.batch = None;
    }

    /// # Panics
    /// Panics if the oracle returns an empty batch.
    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let (oracle, problem, coder) = (&self.oracle, &self.problem, &self.coder);
        let batch = self.batch.get_or_insert_with(|| {
            let genomes = oracle.borrow_mut().ask(&mut *rng);
            assert!(!genomes.is_empty(), "oracle returned an empty batch");
            tracing::trace!(size = genomes.len(), "oracle batch asked");
            let batch = genomes
                .into_iter()
                .map(|g| Arc::new(Individual::new(Arc::clone(problem), Arc::clone(coder), g)))
                .collect();
            Republish::new(batch)
        });
        batch.next(rng)
    }
}

/// Collects one generation of evaluated candidates and tells them to the
/// oracle.
///
/// On the first pull of a generation exactly
/// [`popsize`](AskTellOracle::popsize) individuals are pulled from the
/// provider and reported; they are then republished like
/// [`Generate`] does. Place it after an
/// [`Evaluate`](crate::pipeline::Evaluate) stage.
pub struct Update<C: Coder, P, O> {
    provider: BoxedOperator<C, P>,
    oracle: SharedOracle<O>,
    told: Option<Republish<Arc<Individual<C, P>>>>,
}

impl<C: Coder + 'static, P: 'static, O> Update<C, P, O> {
    /// Wraps `provider`.
    pub fn new(provider: impl Operator<C, P> + 'static, oracle: SharedOracle<O>) -> Self {
        Self {
            provider: Box::new(provider),
            oracle,
            told: None,
        }
    }
}

impl<C, P, O> Operator<C, P> for Update<C, P, O>
where
    C: Coder,
    P: Problem<C::Phenome>,
    O: AskTellOracle<Genome = C::Genome>,
{
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.told = None;
        self.provider.begin_generation(population);
    }

    /// # Panics
    /// Panics if a collected individual has not been evaluated.
    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let (provider, oracle) = (&mut self.provider, &self.oracle);
        let told = self.told.get_or_insert_with(|| {
            let popsize = oracle.borrow().popsize();
            let collected: Vec<_> = (0..popsize).map(|_| provider.pull(&mut *rng)).collect();
            let genomes: Vec<C::Genome> = collected.iter().map(|ind| ind.genome.clone()).collect();
            let fitnesses: Vec<f64> = collected
                .iter()
                .map(|ind| match ind.fitness() {
                    Some(f) => f,
                    None => panic!("oracle update requires evaluated individuals"),
                })
                .collect();
            oracle.borrow_mut().tell(&genomes, &fitnesses);
            tracing::trace!(popsize, "oracle told");
            Republish::new(collected)
        });
        told.next(rng)
    }
}
