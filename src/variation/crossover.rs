//! Uniform crossover for fixed-length genomes.

use crate::core::{Chromosome, Coder, Individual};
use crate::error::{check_probability, ConfigError};
use crate::pipeline::{BoxedOperator, Operator};
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Pulls parents in pairs and exchanges aligned genes.
///
/// With probability `p_cross` a pair is recombined: each position is
/// swapped independently with probability `p_swap`. Both children are
/// returned, the second on the following pull; a held-back child is
/// discarded at the next generation boundary.
pub struct UniformCrossover<C: Coder, P> {
    provider: BoxedOperator<C, P>,
    p_cross: f64,
    p_swap: f64,
    pending: Option<Arc<Individual<C, P>>>,
}

impl<C, P> UniformCrossover<C, P>
where
    C: Coder + 'static,
    C::Genome: Chromosome,
    P: 'static,
{
    /// Wraps `provider`. `p_swap` is usually 0.5.
    ///
    /// # Errors
    /// Returns an error if either probability is outside `[0, 1]`.
    pub fn new(
        provider: impl Operator<C, P> + 'static,
        p_cross: f64,
        p_swap: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            provider: Box::new(provider),
            p_cross: check_probability("p_cross", p_cross)?,
            p_swap: check_probability("p_swap", p_swap)?,
            pending: None,
        })
    }
}

impl<C, P> Operator<C, P> for UniformCrossover<C, P>
where
    C: Coder,
    C::Genome: Chromosome,
{
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.pending = None;
        self.provider.begin_generation(population);
    }

    /// # Panics
    /// Panics if the two parents differ in gene count.
    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        if let Some(second) = self.pending.take() {
            return second;
        }

        let mut first = self.provider.pull(rng);
        let mut second = self.provider.pull(rng);
        let len = first.genome.gene_len();
        assert_eq!(
            len,
            second.genome.gene_len(),
            "uniform crossover requires genomes of equal length"
        );

        if rng.random::<f64>() < self.p_cross {
            let a = Arc::make_mut(&mut first);
            let b = Arc::make_mut(&mut second);
            for i in 0..len {
                if rng.random::<f64>() < self.p_swap {
                    a.genome.swap_gene(&mut b.genome, i);
                }
            }
        }

        self.pending = Some(second);
        first
    }
}
