//! Mutation rate configuration.

use crate::error::{check_probability, ConfigError};

/// How often a leaf gene is mutated.
///
/// # Examples
///
/// ```
/// use u_evolve::variation::MutationRate;
///
/// let rate = MutationRate::from_options(None, Some(2.0)).unwrap();
/// assert_eq!(rate.probability(8), 0.25);
///
/// // exactly one of the two must be given
/// assert!(MutationRate::from_options(Some(0.1), Some(2.0)).is_err());
/// assert!(MutationRate::from_options(None, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationRate {
    /// Fixed per-gene probability `p_mut` in `[0, 1]`.
    PerGene(f64),
    /// Expected number of mutated genes `e_mut` per genome; the per-gene
    /// probability is `e_mut / gene_count`.
    Expected(f64),
}

impl MutationRate {
    /// Every gene mutates.
    pub fn every_gene() -> Self {
        MutationRate::PerGene(1.0)
    }

    /// Builds a rate from the optional `p_mut` / `e_mut` pair.
    ///
    /// # Errors
    /// Returns [`ConfigError::AmbiguousMutationRate`] unless exactly one is
    /// given, or a range error if the given value is invalid.
    pub fn from_options(p_mut: Option<f64>, e_mut: Option<f64>) -> Result<Self, ConfigError> {
        let rate = match (p_mut, e_mut) {
            (Some(p), None) => MutationRate::PerGene(p),
            (None, Some(e)) => MutationRate::Expected(e),
            _ => return Err(ConfigError::AmbiguousMutationRate),
        };
        rate.validate()?;
        Ok(rate)
    }

    /// Validates the rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            MutationRate::PerGene(p) => check_probability("p_mut", p).map(|_| ()),
            MutationRate::Expected(e) if e > 0.0 => Ok(()),
            MutationRate::Expected(e) => Err(ConfigError::NotPositive {
                name: "e_mut",
                value: e,
            }),
        }
    }

    /// Per-gene probability for a genome with `gene_count` leaf genes.
    ///
    /// An expected count larger than the genome means every gene mutates.
    pub fn probability(&self, gene_count: usize) -> f64 {
        match *self {
            MutationRate::PerGene(p) => p,
            MutationRate::Expected(_) if gene_count == 0 => 0.0,
            MutationRate::Expected(e) => (e / gene_count as f64).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_option() {
        assert_eq!(
            MutationRate::from_options(Some(0.1), None),
            Ok(MutationRate::PerGene(0.1))
        );
        assert_eq!(
            MutationRate::from_options(None, Some(1.0)),
            Ok(MutationRate::Expected(1.0))
        );
        assert_eq!(
            MutationRate::from_options(Some(0.1), Some(1.0)),
            Err(ConfigError::AmbiguousMutationRate)
        );
        assert_eq!(
            MutationRate::from_options(None, None),
            Err(ConfigError::AmbiguousMutationRate)
        );
    }

    #[test]
    fn test_validate_ranges() {
        assert!(MutationRate::PerGene(1.5).validate().is_err());
        assert!(MutationRate::PerGene(-0.1).validate().is_err());
        assert!(MutationRate::Expected(0.0).validate().is_err());
        assert!(MutationRate::Expected(0.5).validate().is_ok());
    }

    #[test]
    fn test_expected_probability() {
        let rate = MutationRate::Expected(1.0);
        assert_eq!(rate.probability(10), 0.1);
        assert_eq!(rate.probability(0), 0.0);
        assert_eq!(MutationRate::Expected(5.0).probability(2), 1.0);
        assert_eq!(MutationRate::PerGene(0.3).probability(100), 0.3);
    }
}
