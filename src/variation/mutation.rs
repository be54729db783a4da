//! Per-gene mutation over flat and nested genomes.

use super::config::MutationRate;
use crate::core::{Coder, GeneTree, GenomeSize, Individual};
use crate::error::ConfigError;
use crate::pipeline::{BoxedOperator, Operator};
use crate::random::gaussian;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// A rule for changing one leaf gene.
pub trait GeneMutator {
    /// The leaf gene type this rule applies to.
    type Gene;

    /// Mutates `gene` in place.
    fn mutate_gene(&self, gene: &mut Self::Gene, rng: &mut dyn RngCore);
}

/// Inverts a bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitFlip;

impl GeneMutator for BitFlip {
    type Gene = bool;

    fn mutate_gene(&self, gene: &mut bool, _rng: &mut dyn RngCore) {
        *gene = !*gene;
    }
}

/// Adds `N(0, sigma²)` noise to a real gene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    sigma: f64,
}

impl Gaussian {
    /// # Errors
    /// Returns an error unless `sigma` is positive.
    pub fn new(sigma: f64) -> Result<Self, ConfigError> {
        if sigma > 0.0 {
            Ok(Self { sigma })
        } else {
            Err(ConfigError::NotPositive {
                name: "sigma",
                value: sigma,
            })
        }
    }

    /// Standard deviation of the added noise.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl GeneMutator for Gaussian {
    type Gene = f64;

    fn mutate_gene(&self, gene: &mut f64, rng: &mut dyn RngCore) {
        *gene += self.sigma * gaussian(rng);
    }
}

/// Visits every leaf gene of each pulled genome and mutates it with the
/// configured probability.
///
/// The visit recurses through nested genomes, so a Pitt genome (a list of
/// rules) has every number of every rule considered. With
/// [`MutationRate::Expected`] the probability is recomputed per genome from
/// its leaf-gene count, which keeps the expected number of mutations
/// constant for variable-length genomes.
///
/// The cached fitness is left as is; an [`Evaluate`](crate::pipeline::Evaluate)
/// stage downstream refreshes it.
pub struct Mutation<C: Coder, P, M> {
    provider: BoxedOperator<C, P>,
    mutator: M,
    rate: MutationRate,
}

/// Bit-flip mutation for boolean genomes.
pub type BitFlipMutation<C, P> = Mutation<C, P, BitFlip>;

/// Additive Gaussian mutation for real genomes.
pub type GaussianMutation<C, P> = Mutation<C, P, Gaussian>;

impl<C, P, M> Mutation<C, P, M>
where
    C: Coder + 'static,
    C::Genome: GeneTree<M::Gene>,
    P: 'static,
    M: GeneMutator,
{
    /// Wraps `provider` with `mutator` applied at `rate`.
    ///
    /// # Errors
    /// Returns an error if `rate` is invalid.
    pub fn new(
        provider: impl Operator<C, P> + 'static,
        mutator: M,
        rate: MutationRate,
    ) -> Result<Self, ConfigError> {
        rate.validate()?;
        Ok(Self {
            provider: Box::new(provider),
            mutator,
            rate,
        })
    }

    /// The configured rate.
    pub fn rate(&self) -> MutationRate {
        self.rate
    }
}

impl<C, P> Mutation<C, P, BitFlip>
where
    C: Coder + 'static,
    C::Genome: GeneTree<bool>,
    P: 'static,
{
    /// Bit-flip mutation at `rate`.
    pub fn bit_flip(
        provider: impl Operator<C, P> + 'static,
        rate: MutationRate,
    ) -> Result<Self, ConfigError> {
        Self::new(provider, BitFlip, rate)
    }
}

impl<C, P> Mutation<C, P, Gaussian>
where
    C: Coder + 'static,
    C::Genome: GeneTree<f64>,
    P: 'static,
{
    /// Gaussian mutation with standard deviation `sigma` at `rate`.
    ///
    /// [`MutationRate::every_gene`] is the usual choice.
    pub fn gaussian(
        provider: impl Operator<C, P> + 'static,
        sigma: f64,
        rate: MutationRate,
    ) -> Result<Self, ConfigError> {
        Self::new(provider, Gaussian::new(sigma)?, rate)
    }
}

impl<C, P, M> Operator<C, P> for Mutation<C, P, M>
where
    C: Coder,
    C::Genome: GeneTree<M::Gene>,
    M: GeneMutator,
{
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.provider.begin_generation(population);
    }

    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let mut ind = self.provider.pull(rng);
        let genome = &mut Arc::make_mut(&mut ind).genome;
        let p = self.rate.probability(genome.gene_count());
        let mutator = &self.mutator;
        genome.for_each_gene(&mut |gene| {
            if rng.random::<f64>() < p {
                mutator.mutate_gene(gene, &mut *rng);
            }
        });
        ind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coders::{BinaryCoder, FloatCoder};
    use crate::pipeline::CloneOp;
    use crate::problems::{FunctionProblem, Objective, SimilarityProblem};
    use crate::random::create_rng;
    use crate::select::DeterministicSelection;

    fn zeros(n: usize, count: usize) -> Vec<Arc<Individual<BinaryCoder, SimilarityProblem>>> {
        let problem = Arc::new(SimilarityProblem::one_max(n));
        let coder = Arc::new(BinaryCoder::new(n));
        (0..count)
            .map(|_| Arc::new(Individual::new(problem.clone(), coder.clone(), vec![false; n])))
            .collect()
    }

    #[test]
    fn test_full_rate_flips_everything() {
        let pop = zeros(6, 1);
        let mut op = BitFlipMutation::bit_flip(
            DeterministicSelection::in_order(),
            MutationRate::every_gene(),
        )
        .unwrap();
        let mut rng = create_rng(1);
        op.begin_generation(&pop);
        assert_eq!(op.pull(&mut rng).genome, vec![true; 6]);
        // the prior population is untouched
        assert_eq!(pop[0].genome, vec![false; 6]);
    }

    #[test]
    fn test_zero_rate_changes_nothing() {
        let pop = zeros(6, 1);
        let mut op =
            BitFlipMutation::bit_flip(DeterministicSelection::in_order(), MutationRate::PerGene(0.0))
                .unwrap();
        let mut rng = create_rng(1);
        op.begin_generation(&pop);
        for _ in 0..20 {
            assert_eq!(op.pull(&mut rng).genome, vec![false; 6]);
        }
    }

    #[test]
    fn test_expected_rate_average() {
        let pop = zeros(50, 1);
        let mut op = BitFlipMutation::bit_flip(
            CloneOp::new(DeterministicSelection::in_order()),
            MutationRate::Expected(2.0),
        )
        .unwrap();
        let mut rng = create_rng(3);
        op.begin_generation(&pop);

        let trials = 2000;
        let flipped: usize = (0..trials)
            .map(|_| op.pull(&mut rng).genome.iter().filter(|&&b| b).count())
            .sum();
        let mean = flipped as f64 / trials as f64;
        assert!((mean - 2.0).abs() < 0.15, "expected about 2 flips, got {mean}");
    }

    #[test]
    fn test_nested_genome_recursion() {
        struct Rules;
        impl Coder for Rules {
            type Genome = Vec<Vec<bool>>;
            type Phenome = Vec<Vec<bool>>;
            fn create_random_genome(&self, _rng: &mut dyn RngCore) -> Self::Genome {
                vec![vec![false; 3], vec![false; 2]]
            }
            fn decode_genome(&self, genome: &Self::Genome) -> Self::Phenome {
                genome.clone()
            }
        }
        struct Unused;
        impl crate::core::Problem<Vec<Vec<bool>>> for Unused {
            fn evaluate(&self, _: &mut Vec<Vec<bool>>, _: &mut dyn RngCore) -> f64 {
                0.0
            }
            fn better_than(&self, a: f64, b: f64) -> bool {
                a > b
            }
            fn equivalent_to(&self, a: f64, b: f64) -> bool {
                a == b
            }
        }

        let mut rng = create_rng(0);
        let pop = vec![Arc::new(Individual::random(
            Arc::new(Unused),
            Arc::new(Rules),
            &mut rng,
        ))];
        let mut op =
            Mutation::bit_flip(DeterministicSelection::in_order(), MutationRate::every_gene()).unwrap();
        op.begin_generation(&pop);
        assert_eq!(op.pull(&mut rng).genome, vec![vec![true; 3], vec![true; 2]]);
    }

    #[test]
    fn test_gaussian_moves_genes() {
        let problem = Arc::new(FunctionProblem::new(
            |x: &[f64]| x.iter().sum::<f64>(),
            Objective::Minimize,
        ));
        let coder = Arc::new(FloatCoder::new(vec![(0.0, 0.0); 4]));
        let pop = vec![Arc::new(Individual::new(problem, coder, vec![0.0; 4]))];
        let mut op = GaussianMutation::gaussian(
            DeterministicSelection::in_order(),
            0.5,
            MutationRate::every_gene(),
        )
        .unwrap();
        let mut rng = create_rng(8);
        op.begin_generation(&pop);

        let child = op.pull(&mut rng);
        assert!(child.genome.iter().all(|&g| g != 0.0));
        assert!(child.genome.iter().all(|g| g.abs() < 5.0));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Gaussian::new(0.0).is_err());
        assert!(Gaussian::new(-1.0).is_err());
        let op: Result<BitFlipMutation<BinaryCoder, SimilarityProblem>, _> =
            BitFlipMutation::bit_flip(DeterministicSelection::in_order(), MutationRate::PerGene(2.0));
        assert!(op.is_err());
    }
}
