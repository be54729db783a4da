//! EA driver configuration.
//!
//! [`EaConfig`] holds the parameters of the generational loop. Operator
//! parameters live with the operators themselves.

use crate::error::ConfigError;

/// Configuration for [`GenerationalEa`](super::GenerationalEa).
///
/// # Defaults
///
/// ```
/// use u_evolve::ea::EaConfig;
///
/// let config = EaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 200);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ea::EaConfig;
///
/// let config = EaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(30)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EaConfig {
    /// Individuals pulled from the pipeline per generation.
    ///
    /// Survival operators with a fixed output size (such as
    /// [`MuLambdaSurvival`](crate::survive::MuLambdaSurvival)) cycle through
    /// their survivors, so this also sets the size of the next population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate the initial population in parallel.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 200,
            seed: None,
            parallel: false,
        }
    }
}

impl EaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel initial evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for quick runs: population 30, 50 generations.
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            max_generations: 50,
            ..Self::default()
        }
    }

    /// Preset for moderate runs: population 100, 200 generations.
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for long runs: population 300, 1000 generations.
    pub fn quality() -> Self {
        Self {
            population_size: 300,
            max_generations: 1000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::CountTooSmall {
                name: "population_size",
                min: 1,
                value: 0,
            });
        }
        if self.max_generations == 0 {
            return Err(ConfigError::CountTooSmall {
                name: "max_generations",
                min: 1,
                value: 0,
            });
        }
        Ok(())
    }
}
