//! (μ,λ) and (μ+λ) survival.

use crate::core::{Coder, Individual, Problem};
use crate::error::ConfigError;
use crate::pipeline::{BoxedOperator, Operator};
use crate::select::{rank_top, Comparator, FitnessOrder};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::sync::Arc;

/// Which individuals compete for survival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurvivalPool {
    /// (μ,λ): only the λ offspring compete.
    Comma,
    /// (μ+λ): parents and offspring compete together.
    Plus,
}

/// Evolution-strategy survival.
///
/// The prior population is recorded as μ at
/// [`begin_generation`](Operator::begin_generation). On the first pull of a
/// generation exactly λ offspring are pulled from the provider, the pool
/// (λ, or μ ∪ λ) is ranked, and the best |μ| survive. The survivors are
/// then handed out one pass at a time, reshuffled before every pass, for as
/// many pulls as the driver makes. The provider is never pulled more than
/// λ times per generation.
///
/// With [`SurvivalPool::Comma`] and λ < |μ|, only λ survivors exist and
/// each pass is λ long.
pub struct MuLambdaSurvival<C: Coder, P> {
    provider: BoxedOperator<C, P>,
    num_lambda: usize,
    pool: SurvivalPool,
    comparator: Box<dyn Comparator<C, P>>,
    parents: Vec<Arc<Individual<C, P>>>,
    survivors: Vec<Arc<Individual<C, P>>>,
    ranked: bool,
    cursor: usize,
}

impl<C, P> MuLambdaSurvival<C, P>
where
    C: Coder + 'static,
    P: Problem<C::Phenome> + 'static,
{
    /// Creates survival over `pool` with `num_lambda` offspring per generation.
    ///
    /// # Errors
    /// Returns an error if `num_lambda` is zero.
    pub fn new(
        provider: impl Operator<C, P> + 'static,
        num_lambda: usize,
        pool: SurvivalPool,
    ) -> Result<Self, ConfigError> {
        if num_lambda == 0 {
            return Err(ConfigError::CountTooSmall {
                name: "num_lambda",
                min: 1,
                value: num_lambda,
            });
        }
        Ok(Self {
            provider: Box::new(provider),
            num_lambda,
            pool,
            comparator: Box::new(FitnessOrder),
            parents: Vec::new(),
            survivors: Vec::new(),
            ranked: false,
            cursor: 0,
        })
    }

    /// (μ,λ) survival.
    pub fn comma(
        provider: impl Operator<C, P> + 'static,
        num_lambda: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(provider, num_lambda, SurvivalPool::Comma)
    }

    /// (μ+λ) survival.
    pub fn plus(
        provider: impl Operator<C, P> + 'static,
        num_lambda: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(provider, num_lambda, SurvivalPool::Plus)
    }
}

impl<C: Coder, P> MuLambdaSurvival<C, P> {
    /// Replaces the comparator used to rank the pool.
    pub fn with_comparator(mut self, comparator: impl Comparator<C, P> + 'static) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Offspring pulled per generation.
    pub fn num_lambda(&self) -> usize {
        self.num_lambda
    }

    /// Comma or plus.
    pub fn pool(&self) -> SurvivalPool {
        self.pool
    }

    fn select_survivors(&mut self, rng: &mut dyn RngCore) -> Vec<Arc<Individual<C, P>>> {
        let mu = self.parents.len();
        assert!(mu > 0, "mu/lambda survival needs a non-empty prior population");

        let mut pool: Vec<_> = (0..self.num_lambda).map(|_| self.provider.pull(rng)).collect();
        if self.pool == SurvivalPool::Plus {
            pool.append(&mut self.parents);
        }
        let survivors = rank_top(pool, mu, &*self.comparator, rng);
        tracing::trace!(mu, lambda = self.num_lambda, survivors = survivors.len(), "survivors ranked");
        survivors
    }
}

impl<C: Coder, P> Operator<C, P> for MuLambdaSurvival<C, P> {
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.parents = population.to_vec();
        self.survivors.clear();
        self.ranked = false;
        self.cursor = 0;
        self.provider.begin_generation(population);
    }

    /// # Panics
    /// Panics if the prior population was empty.
    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        if !self.ranked {
            self.survivors = self.select_survivors(rng);
            self.ranked = true;
        }
        if self.cursor == 0 {
            self.survivors.shuffle(rng);
        }
        let ind = Arc::clone(&self.survivors[self.cursor]);
        self.cursor = (self.cursor + 1) % self.survivors.len();
        ind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coders::FloatCoder;
    use crate::problems::{FunctionProblem, Objective};
    use crate::random::create_rng;
    use std::cell::Cell;
    use std::rc::Rc;

    type Score = FunctionProblem<fn(&[f64]) -> f64>;
    type Ind = Individual<FloatCoder, Score>;

    fn first(x: &[f64]) -> f64 {
        x[0]
    }

    fn scored(values: &[f64]) -> Vec<Arc<Ind>> {
        let problem = Arc::new(FunctionProblem::new(first as fn(&[f64]) -> f64, Objective::Maximize));
        let coder = Arc::new(FloatCoder::new(vec![(0.0, 1.0)]));
        let mut rng = create_rng(0);
        values
            .iter()
            .map(|&v| {
                let mut ind = Individual::new(problem.clone(), coder.clone(), vec![v]);
                ind.evaluate(&mut rng);
                Arc::new(ind)
            })
            .collect()
    }

    /// Cycles through a fixed offspring list and counts pulls.
    struct Offspring {
        brood: Vec<Arc<Ind>>,
        pulls: Rc<Cell<usize>>,
    }

    impl Operator<FloatCoder, Score> for Offspring {
        fn begin_generation(&mut self, _population: &[Arc<Ind>]) {}

        fn pull(&mut self, _rng: &mut dyn RngCore) -> Arc<Ind> {
            let n = self.pulls.get();
            self.pulls.set(n + 1);
            Arc::clone(&self.brood[n % self.brood.len()])
        }
    }

    fn offspring(values: &[f64]) -> (Offspring, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let op = Offspring {
            brood: scored(values),
            pulls: Rc::clone(&pulls),
        };
        (op, pulls)
    }

    fn sorted_fitness(inds: &[Arc<Ind>]) -> Vec<f64> {
        let mut fits: Vec<f64> = inds.iter().filter_map(|i| i.fitness()).collect();
        fits.sort_by(f64::total_cmp);
        fits
    }

    #[test]
    fn test_comma_keeps_best_offspring() {
        let parents = scored(&[10.0, 0.0, 1.0]);
        let (brood, _) = offspring(&[5.0, 4.0, 3.0, 6.0, 7.0]);
        let mut op = MuLambdaSurvival::comma(brood, 5).unwrap();
        let mut rng = create_rng(42);
        op.begin_generation(&parents);

        let pass: Vec<Arc<Ind>> = (0..3).map(|_| op.pull(&mut rng)).collect();
        assert_eq!(sorted_fitness(&pass), vec![5.0, 6.0, 7.0]);
        let pass: Vec<Arc<Ind>> = (0..3).map(|_| op.pull(&mut rng)).collect();
        assert_eq!(sorted_fitness(&pass), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_plus_lets_parents_compete() {
        let parents = scored(&[10.0, 0.0, 1.0]);
        let (brood, _) = offspring(&[5.0, 4.0, 3.0]);
        let mut op = MuLambdaSurvival::plus(brood, 3).unwrap();
        let mut rng = create_rng(42);
        op.begin_generation(&parents);

        let pass: Vec<Arc<Ind>> = (0..3).map(|_| op.pull(&mut rng)).collect();
        assert_eq!(sorted_fitness(&pass), vec![4.0, 5.0, 10.0]);
    }

    #[test]
    fn test_provider_pulled_exactly_lambda_times() {
        let parents = scored(&[1.0, 2.0]);
        let (brood, pulls) = offspring(&[3.0, 4.0, 5.0, 6.0]);
        let mut op = MuLambdaSurvival::comma(brood, 4).unwrap();
        let mut rng = create_rng(42);

        op.begin_generation(&parents);
        for _ in 0..10 {
            op.pull(&mut rng);
        }
        assert_eq!(pulls.get(), 4);

        op.begin_generation(&parents);
        op.pull(&mut rng);
        assert_eq!(pulls.get(), 8);
    }

    #[test]
    fn test_comma_with_fewer_offspring_than_parents() {
        let parents = scored(&[1.0, 2.0, 3.0]);
        let (brood, _) = offspring(&[7.0]);
        let mut op = MuLambdaSurvival::comma(brood, 1).unwrap();
        let mut rng = create_rng(42);
        op.begin_generation(&parents);

        for _ in 0..3 {
            assert_eq!(op.pull(&mut rng).fitness(), Some(7.0));
        }
    }

    #[test]
    fn test_zero_lambda_rejected() {
        let (brood, _) = offspring(&[1.0]);
        assert!(MuLambdaSurvival::comma(brood, 0).is_err());
    }
}
