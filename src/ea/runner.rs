//! Generational loop execution.
//!
//! [`GenerationalEa`] owns the population and the pipeline and drives
//! them: random initialization → evaluation → (rebind → pull) × generations.

use super::config::EaConfig;
use crate::core::{Coder, Individual, Population, Problem};
use crate::error::ConfigError;
use crate::pipeline::{BoxedOperator, Operator};
use crate::random::create_rng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::instrument;

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct EaResult<C: Coder, P> {
    /// Best individual seen during the run.
    pub best: Arc<Individual<C, P>>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Generations executed.
    pub generations: usize,

    /// Best-so-far fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,

    /// The final population.
    pub population: Population<C, P>,
}

/// A generational evolutionary algorithm over an operator pipeline.
///
/// Each generation rebinds the pipeline to the current population and
/// pulls exactly [`population_size`](EaConfig::population_size) individuals
/// from it; those become the next population. What happens in between
/// (selection, variation, evaluation, survival) is entirely up to the
/// pipeline.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use u_evolve::coders::BinaryCoder;
/// use u_evolve::ea::{EaConfig, GenerationalEa};
/// use u_evolve::pipeline::{CloneOp, Evaluate};
/// use u_evolve::problems::SimilarityProblem;
/// use u_evolve::select::TournamentSelection;
/// use u_evolve::survive::Elitism;
/// use u_evolve::variation::{BitFlipMutation, MutationRate};
///
/// let pipeline = Elitism::new(
///     Evaluate::new(
///         BitFlipMutation::bit_flip(
///             CloneOp::new(TournamentSelection::new(2).unwrap()),
///             MutationRate::Expected(1.0),
///         )
///         .unwrap(),
///     ),
///     1,
/// );
/// let config = EaConfig::fast().with_seed(42);
/// let result = GenerationalEa::run(
///     Arc::new(SimilarityProblem::one_max(16)),
///     Arc::new(BinaryCoder::new(16)),
///     pipeline,
///     &config,
/// )
/// .unwrap();
/// assert!(result.best_fitness >= 14.0);
/// ```
pub struct GenerationalEa<C: Coder, P> {
    pipeline: BoxedOperator<C, P>,
    population: Population<C, P>,
    population_size: usize,
    best: Arc<Individual<C, P>>,
    best_fitness: f64,
    fitness_history: Vec<f64>,
    generation: usize,
    rng: StdRng,
}

impl<C, P> GenerationalEa<C, P>
where
    C: Coder + 'static,
    P: Problem<C::Phenome> + 'static,
{
    /// Creates and evaluates a random initial population.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(
        problem: Arc<P>,
        coder: Arc<C>,
        pipeline: impl Operator<C, P> + 'static,
        config: &EaConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut initial: Vec<Individual<C, P>> = (0..config.population_size)
            .map(|_| Individual::random(Arc::clone(&problem), Arc::clone(&coder), &mut rng))
            .collect();
        evaluate_all(&mut initial, &mut rng, config.parallel);

        let population: Population<C, P> = initial.into_iter().map(Arc::new).collect();
        let (best, best_fitness) = find_best(&population)
            .unwrap_or_else(|| (Arc::clone(&population[0]), f64::NAN));

        Ok(Self {
            pipeline: Box::new(pipeline),
            population,
            population_size: config.population_size,
            best,
            best_fitness,
            fitness_history: vec![best_fitness],
            generation: 0,
            rng,
        })
    }

    /// Runs `config.max_generations` generations and returns the result.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    #[instrument(skip_all, fields(population_size = config.population_size, max_generations = config.max_generations))]
    pub fn run(
        problem: Arc<P>,
        coder: Arc<C>,
        pipeline: impl Operator<C, P> + 'static,
        config: &EaConfig,
    ) -> Result<EaResult<C, P>, ConfigError> {
        let mut ea = Self::new(problem, coder, pipeline, config)?;
        for _ in 0..config.max_generations {
            ea.step();
        }
        tracing::info!(
            generations = ea.generation,
            best_fitness = ea.best_fitness,
            "run complete"
        );
        Ok(ea.into_result())
    }

    /// Advances one generation and returns the best-so-far fitness.
    pub fn step(&mut self) -> f64 {
        self.pipeline.begin_generation(&self.population);
        let next: Population<C, P> = (0..self.population_size)
            .map(|_| self.pipeline.pull(&mut self.rng))
            .collect();

        if let Some((candidate, fitness)) = find_best(&next) {
            if candidate.better_than(&self.best) {
                self.best = candidate;
                self.best_fitness = fitness;
            }
        }
        self.population = next;
        self.generation += 1;
        self.fitness_history.push(self.best_fitness);

        tracing::debug!(
            generation = self.generation,
            best_fitness = self.best_fitness,
            "generation complete"
        );
        self.best_fitness
    }

    /// The current population.
    pub fn population(&self) -> &[Arc<Individual<C, P>>] {
        &self.population
    }

    /// The best individual seen so far.
    pub fn best(&self) -> &Arc<Individual<C, P>> {
        &self.best
    }

    /// Generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Consumes the driver, returning its best individual and history.
    pub fn into_result(self) -> EaResult<C, P> {
        EaResult {
            best: self.best,
            best_fitness: self.best_fitness,
            generations: self.generation,
            fitness_history: self.fitness_history,
            population: self.population,
        }
    }
}

/// The best evaluated individual in `population`, if any is evaluated.
fn find_best<C, P>(population: &[Arc<Individual<C, P>>]) -> Option<(Arc<Individual<C, P>>, f64)>
where
    C: Coder,
    P: Problem<C::Phenome>,
{
    let mut best: Option<(&Arc<Individual<C, P>>, f64)> = None;
    for ind in population {
        let Some(fitness) = ind.fitness() else {
            continue;
        };
        match best {
            Some((current, _)) if !ind.better_than(current) => {}
            _ => best = Some((ind, fitness)),
        }
    }
    best.map(|(ind, fitness)| (Arc::clone(ind), fitness))
}

#[cfg(feature = "parallel")]
fn evaluate_all<C, P>(population: &mut [Individual<C, P>], rng: &mut StdRng, parallel: bool)
where
    C: Coder,
    P: Problem<C::Phenome>,
{
    use rand::Rng;
    use rayon::prelude::*;

    if !parallel {
        population.iter_mut().for_each(|ind| {
            ind.evaluate(rng);
        });
        return;
    }
    // one seed per individual, drawn in population order
    let seeds: Vec<u64> = population.iter().map(|_| rng.random()).collect();
    population
        .par_iter_mut()
        .zip(seeds)
        .for_each(|(ind, seed)| {
            ind.evaluate(&mut create_rng(seed));
        });
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<C, P>(population: &mut [Individual<C, P>], rng: &mut StdRng, _parallel: bool)
where
    C: Coder,
    P: Problem<C::Phenome>,
{
    for ind in population {
        ind.evaluate(rng);
    }
}
