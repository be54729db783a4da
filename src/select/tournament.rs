//! Tournament selection.

use super::comparator::{Comparator, FitnessOrder};
use super::deterministic::DeterministicSelection;
use crate::core::{Coder, Individual, Problem};
use crate::error::ConfigError;
use crate::pipeline::Operator;
use crate::random::pick_index;
use rand::RngCore;
use std::cmp::Ordering;
use std::sync::Arc;

/// Returns the best of `k` contestants per pull.
///
/// Contestants are drawn through an internal shuffled
/// [`DeterministicSelection`], so every member competes once before any
/// member competes twice. This draws without replacement across
/// tournaments, which lowers genetic drift compared to sampling each pool
/// with replacement. Ties for best are resolved uniformly at random.
///
/// # Examples
///
/// ```
/// use u_evolve::coders::BinaryCoder;
/// use u_evolve::problems::SimilarityProblem;
/// use u_evolve::select::{LexicographicParsimony, TournamentSelection};
///
/// let sel: TournamentSelection<BinaryCoder, SimilarityProblem> =
///     TournamentSelection::new(3).unwrap().with_comparator(LexicographicParsimony);
/// assert_eq!(sel.tournament_size(), 3);
/// ```
pub struct TournamentSelection<C: Coder, P> {
    tournament_size: usize,
    comparator: Box<dyn Comparator<C, P>>,
    contestants: DeterministicSelection<C, P>,
}

impl<C, P> TournamentSelection<C, P>
where
    C: Coder + 'static,
    P: Problem<C::Phenome> + 'static,
{
    /// Creates a tournament of size `k` under [`FitnessOrder`].
    ///
    /// # Errors
    /// Returns an error if `k` is zero.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        if k == 0 {
            return Err(ConfigError::CountTooSmall {
                name: "tournament_size",
                min: 1,
                value: k,
            });
        }
        Ok(Self {
            tournament_size: k,
            comparator: Box::new(FitnessOrder),
            contestants: DeterministicSelection::shuffled(),
        })
    }
}

impl<C: Coder, P> TournamentSelection<C, P> {
    /// Replaces the comparator used to pick winners.
    pub fn with_comparator(mut self, comparator: impl Comparator<C, P> + 'static) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Number of contestants per tournament.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }
}

impl<C: Coder, P> Operator<C, P> for TournamentSelection<C, P> {
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.contestants.begin_generation(population);
    }

    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let mut besties = vec![self.contestants.pull(rng)];
        for _ in 1..self.tournament_size {
            let challenger = self.contestants.pull(rng);
            match self.comparator.compare(&challenger, &besties[0]) {
                Ordering::Greater => besties = vec![challenger],
                Ordering::Equal => besties.push(challenger),
                Ordering::Less => {}
            }
        }
        let winner = pick_index(besties.len(), rng);
        besties.swap_remove(winner)
    }
}
