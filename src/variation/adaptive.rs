//! Self-adaptive Gaussian mutation (evolution-strategy style).
//!
//! Reference: Bäck & Schwefel (1993), "An Overview of Evolutionary
//! Algorithms for Parameter Optimization", Evolutionary Computation 1(1).

use crate::coders::AdaptiveGene;
use crate::core::{Coder, Individual};
use crate::error::ConfigError;
use crate::pipeline::{BoxedOperator, Operator};
use crate::random::gaussian;
use rand::RngCore;
use std::sync::Arc;

/// Mutates `(value, sigma)` genes, evolving each gene's step size along
/// with its value.
///
/// For every pulled genome of `n` genes one global deviate
/// `τ'·N(0,1)` is drawn; then each gene's sigma is multiplied by
/// `exp(τ'·N + τ·N(0,1))`, clipped into its bounds, and used to perturb the
/// value. `τ = 1/√(2√n)` and `τ' = 1/√(2n)`.
///
/// Pair with [`AdaptiveFloatCoder`](crate::coders::AdaptiveFloatCoder).
pub struct AdaptiveMutation<C: Coder, P> {
    provider: BoxedOperator<C, P>,
    sigma_bounds: Vec<(f64, f64)>,
    tau: f64,
    tau_prime: f64,
}

impl<C, P> AdaptiveMutation<C, P>
where
    C: Coder<Genome = Vec<AdaptiveGene>> + 'static,
    P: 'static,
{
    /// Wraps `provider`; `sigma_bounds[i]` is the `(min, max)` sigma of gene `i`.
    ///
    /// # Errors
    /// Returns an error if `sigma_bounds` is empty, any lower bound is not
    /// positive, or any range is inverted.
    pub fn new(
        provider: impl Operator<C, P> + 'static,
        sigma_bounds: Vec<(f64, f64)>,
    ) -> Result<Self, ConfigError> {
        if sigma_bounds.is_empty() {
            return Err(ConfigError::CountTooSmall {
                name: "sigma_bounds",
                min: 1,
                value: 0,
            });
        }
        for (index, &(lo, hi)) in sigma_bounds.iter().enumerate() {
            // both checks also reject NaN
            if !(lo > 0.0) {
                return Err(ConfigError::NotPositive {
                    name: "sigma_bounds",
                    value: lo,
                });
            }
            if !(lo <= hi) {
                return Err(ConfigError::InvertedRange {
                    name: "sigma_bounds",
                    index,
                    lo,
                    hi,
                });
            }
        }
        let n = sigma_bounds.len() as f64;
        Ok(Self {
            provider: Box::new(provider),
            sigma_bounds,
            tau: 1.0 / (2.0 * n.sqrt()).sqrt(),
            tau_prime: 1.0 / (2.0 * n).sqrt(),
        })
    }

    /// Per-gene learning rate `τ`.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Global learning rate `τ'`.
    pub fn tau_prime(&self) -> f64 {
        self.tau_prime
    }
}

impl<C, P> Operator<C, P> for AdaptiveMutation<C, P>
where
    C: Coder<Genome = Vec<AdaptiveGene>>,
{
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.provider.begin_generation(population);
    }

    /// # Panics
    /// Panics if the genome length differs from the number of sigma bounds.
    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        let mut ind = self.provider.pull(rng);
        let genome = &mut Arc::make_mut(&mut ind).genome;
        assert_eq!(
            genome.len(),
            self.sigma_bounds.len(),
            "adaptive mutation needs one sigma bound per gene"
        );

        let global = self.tau_prime * gaussian(rng);
        for (gene, &(lo, hi)) in genome.iter_mut().zip(&self.sigma_bounds) {
            let step = (global + self.tau * gaussian(rng)).exp();
            gene.sigma = (gene.sigma * step).clamp(lo, hi);
            gene.value += gene.sigma * gaussian(rng);
        }
        ind
    }
}
