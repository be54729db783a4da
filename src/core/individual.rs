//! Individuals and populations.

use super::genome::GenomeSize;
use super::types::{Coder, Problem};
use rand::RngCore;
use std::fmt;
use std::sync::Arc;

/// One generation's worth of individuals.
///
/// Members are shared handles: selection and survival operators hand out
/// the same individual more than once without copying it. Operators that
/// change an individual go through [`Arc::make_mut`], so a member of the
/// prior generation is never modified in place.
pub type Population<C, P> = Vec<Arc<Individual<C, P>>>;

/// A genome bound to its coder and problem, with a cached fitness.
///
/// The fitness is `None` until [`evaluate`](Individual::evaluate) runs.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_evolve::coders::BinaryCoder;
/// use u_evolve::core::Individual;
/// use u_evolve::problems::SimilarityProblem;
/// use u_evolve::random::create_rng;
///
/// let problem = Arc::new(SimilarityProblem::one_max(5));
/// let coder = Arc::new(BinaryCoder::new(5));
/// let mut rng = create_rng(42);
///
/// let mut weak = Individual::new(problem.clone(), coder.clone(), vec![false; 5]);
/// let mut strong = Individual::new(problem, coder, vec![true; 5]);
/// weak.evaluate(&mut rng);
/// strong.evaluate(&mut rng);
///
/// assert!(strong.better_than(&weak));
/// assert!(!weak.better_than(&strong));
/// assert!(!weak.equivalent_to(&strong));
/// ```
pub struct Individual<C: Coder, P> {
    problem: Arc<P>,
    coder: Arc<C>,
    /// The individual's genome.
    pub genome: C::Genome,
    fitness: Option<f64>,
}

impl<C, P> Individual<C, P>
where
    C: Coder,
    P: Problem<C::Phenome>,
{
    /// Creates an unevaluated individual around an existing genome.
    pub fn new(problem: Arc<P>, coder: Arc<C>, genome: C::Genome) -> Self {
        Self {
            problem,
            coder,
            genome,
            fitness: None,
        }
    }

    /// Creates an unevaluated individual with a random genome.
    pub fn random(problem: Arc<P>, coder: Arc<C>, rng: &mut dyn RngCore) -> Self {
        let genome = coder.create_random_genome(rng);
        Self::new(problem, coder, genome)
    }

    /// Decodes the genome, evaluates the phenome and caches the fitness.
    pub fn evaluate(&mut self, rng: &mut dyn RngCore) -> f64 {
        let mut phenome = self.coder.decode_genome(&self.genome);
        let fitness = self.problem.evaluate(&mut phenome, rng);
        self.fitness = Some(fitness);
        fitness
    }

    /// Decodes the genome without evaluating it.
    pub fn decode(&self) -> C::Phenome {
        self.coder.decode_genome(&self.genome)
    }

    /// The cached fitness, `None` if never evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Replaces the genome and clears the cached fitness.
    pub fn set_genome(&mut self, genome: C::Genome) {
        self.genome = genome;
        self.fitness = None;
    }

    /// The problem this individual is scored against.
    pub fn problem(&self) -> &Arc<P> {
        &self.problem
    }

    /// The coder that created this individual's genome.
    pub fn coder(&self) -> &Arc<C> {
        &self.coder
    }

    /// Returns `true` if both are evaluated and `self` is strictly better.
    pub fn better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(a), Some(b)) => self.problem.better_than(a, b),
            (Some(_), None) => true,
            _ => false,
        }
    }

    /// Returns `true` if both fitnesses are equivalent, or both are unset.
    pub fn equivalent_to(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(a), Some(b)) => self.problem.equivalent_to(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<C: Coder, P> Individual<C, P>
where
    C::Genome: GenomeSize,
{
    /// Number of leaf genes in the genome.
    pub fn size(&self) -> usize {
        self.genome.gene_count()
    }
}

impl<C: Coder, P> Clone for Individual<C, P> {
    /// Copies the genome through [`Coder::copy_genome`]; the fitness is kept.
    fn clone(&self) -> Self {
        Self {
            problem: Arc::clone(&self.problem),
            coder: Arc::clone(&self.coder),
            genome: self.coder.copy_genome(&self.genome),
            fitness: self.fitness,
        }
    }
}

impl<C: Coder, P> fmt::Debug for Individual<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Individual")
            .field("genome", &self.genome)
            .field("fitness", &self.fitness)
            .finish()
    }
}
