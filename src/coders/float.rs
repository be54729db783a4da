//! Real-valued coders.

use crate::core::Coder;
use crate::error::ConfigError;
use rand::{Rng, RngCore};

/// Uniform draw from `[lo, hi)`; tolerates `lo == hi` and inverted ranges.
fn uniform(rng: &mut dyn RngCore, (lo, hi): (f64, f64)) -> f64 {
    lo + (hi - lo) * rng.random::<f64>()
}

/// Fixed-length real vectors; the genome is the phenome.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatCoder {
    init_ranges: Vec<(f64, f64)>,
}

impl FloatCoder {
    /// Creates a coder whose random genomes draw gene `i` from `init_ranges[i]`.
    pub fn new(init_ranges: Vec<(f64, f64)>) -> Self {
        Self { init_ranges }
    }

    /// Number of genes per genome.
    pub fn dimensions(&self) -> usize {
        self.init_ranges.len()
    }
}

impl Coder for FloatCoder {
    type Genome = Vec<f64>;
    type Phenome = Vec<f64>;

    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        self.init_ranges.iter().map(|&r| uniform(rng, r)).collect()
    }

    fn decode_genome(&self, genome: &Vec<f64>) -> Vec<f64> {
        genome.clone()
    }

    fn copy_genome(&self, genome: &Vec<f64>) -> Vec<f64> {
        genome.to_vec()
    }
}

/// A real gene paired with its own mutation step size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveGene {
    /// The gene value.
    pub value: f64,
    /// Standard deviation used when mutating `value`.
    pub sigma: f64,
}

impl AdaptiveGene {
    /// Creates a gene.
    pub fn new(value: f64, sigma: f64) -> Self {
        Self { value, sigma }
    }
}

/// Real vectors whose genes carry a self-adapted sigma.
///
/// Designed to be paired with
/// [`AdaptiveMutation`](crate::variation::AdaptiveMutation), which adapts
/// and clips the sigmas. The phenome is the vector of gene values.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveFloatCoder {
    init_ranges: Vec<(f64, f64)>,
    init_sigmas: Vec<f64>,
}

impl AdaptiveFloatCoder {
    /// Creates a coder.
    ///
    /// When `init_sigmas` is `None`, gene `i` starts with sigma
    /// `(hi_i - lo_i) / sqrt(n)`.
    ///
    /// # Errors
    /// Returns an error if `init_sigmas` does not have one entry per range.
    pub fn new(
        init_ranges: Vec<(f64, f64)>,
        init_sigmas: Option<Vec<f64>>,
    ) -> Result<Self, ConfigError> {
        let init_sigmas = match init_sigmas {
            Some(sigmas) => sigmas,
            None => {
                let denom = (init_ranges.len() as f64).sqrt();
                init_ranges.iter().map(|&(lo, hi)| (hi - lo) / denom).collect()
            }
        };
        if init_sigmas.len() != init_ranges.len() {
            return Err(ConfigError::LengthMismatch {
                name: "init_sigmas",
                expected: init_ranges.len(),
                actual: init_sigmas.len(),
            });
        }
        Ok(Self {
            init_ranges,
            init_sigmas,
        })
    }

    /// Initial sigma of each gene.
    pub fn init_sigmas(&self) -> &[f64] {
        &self.init_sigmas
    }
}

impl Coder for AdaptiveFloatCoder {
    type Genome = Vec<AdaptiveGene>;
    type Phenome = Vec<f64>;

    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Vec<AdaptiveGene> {
        self.init_ranges
            .iter()
            .zip(&self.init_sigmas)
            .map(|(&range, &sigma)| AdaptiveGene::new(uniform(rng, range), sigma))
            .collect()
    }

    fn decode_genome(&self, genome: &Vec<AdaptiveGene>) -> Vec<f64> {
        genome.iter().map(|g| g.value).collect()
    }

    fn copy_genome(&self, genome: &Vec<AdaptiveGene>) -> Vec<AdaptiveGene> {
        genome.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_float_genome_within_ranges() {
        let coder = FloatCoder::new(vec![(0.0, 1.0), (-5.0, -4.0), (2.0, 2.0)]);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let genome = coder.create_random_genome(&mut rng);
            assert_eq!(genome.len(), 3);
            assert!((0.0..1.0).contains(&genome[0]));
            assert!((-5.0..-4.0).contains(&genome[1]));
            assert_eq!(genome[2], 2.0);
        }
    }

    #[test]
    fn test_adaptive_default_sigmas() {
        let coder = AdaptiveFloatCoder::new(vec![(0.0, 4.0); 4], None).unwrap();
        // (4 - 0) / sqrt(4) = 2
        assert_eq!(coder.init_sigmas(), &[2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_adaptive_decode_drops_sigmas() {
        let coder = AdaptiveFloatCoder::new(vec![(0.0, 1.0); 2], Some(vec![0.1, 0.2])).unwrap();
        let genome = vec![AdaptiveGene::new(0.5, 0.1), AdaptiveGene::new(0.7, 0.2)];
        assert_eq!(coder.decode_genome(&genome), vec![0.5, 0.7]);
    }

    #[test]
    fn test_adaptive_random_genome_uses_init_sigmas() {
        let coder = AdaptiveFloatCoder::new(vec![(0.0, 1.0); 3], Some(vec![0.1, 0.2, 0.3])).unwrap();
        let mut rng = create_rng(7);
        let genome = coder.create_random_genome(&mut rng);
        let sigmas: Vec<f64> = genome.iter().map(|g| g.sigma).collect();
        assert_eq!(sigmas, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_adaptive_sigma_length_mismatch() {
        assert!(AdaptiveFloatCoder::new(vec![(0.0, 1.0); 3], Some(vec![0.1])).is_err());
    }
}
