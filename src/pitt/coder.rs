//! Coders that decode rule lists into interpreters.

use super::config::PittConfig;
use super::interp::RuleInterpreter;
use crate::core::Coder;
use crate::error::ConfigError;
use rand::{Rng, RngCore};

/// Rule sets whose rules carry explicit bound pairs.
///
/// The genome is a variable-length list of rule sub-genomes, each created,
/// decoded and copied by `rule_coder`. Decoding turns every sub-genome into
/// a numeric rule and builds a [`RuleInterpreter`] from them.
///
/// # Examples
///
/// ```
/// use u_evolve::coders::FloatCoder;
/// use u_evolve::core::Coder;
/// use u_evolve::pitt::{InterpreterConfig, PittBoundsCoder, PittConfig};
/// use u_evolve::random::create_rng;
///
/// // one input (a lo/hi pair) and one output per rule
/// let rules = FloatCoder::new(vec![(0.0, 1.0); 3]);
/// let config = PittConfig::new(4, 8, InterpreterConfig::new(1, 1));
/// let coder = PittBoundsCoder::new(rules, config).unwrap();
///
/// let mut rng = create_rng(42);
/// let genome = coder.create_random_genome(&mut rng);
/// assert!((4..=8).contains(&genome.len()));
/// assert_eq!(coder.decode_genome(&genome).len(), genome.len());
/// ```
#[derive(Debug, Clone)]
pub struct PittBoundsCoder<RC> {
    rule_coder: RC,
    config: PittConfig,
}

impl<RC> PittBoundsCoder<RC>
where
    RC: Coder<Phenome = Vec<f64>>,
{
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(rule_coder: RC, config: PittConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rule_coder, config })
    }

    /// The per-rule coder.
    pub fn rule_coder(&self) -> &RC {
        &self.rule_coder
    }

    /// The rule-set configuration.
    pub fn config(&self) -> &PittConfig {
        &self.config
    }

    fn decode_rules(&self, genome: &[RC::Genome]) -> Vec<Vec<f64>> {
        genome
            .iter()
            .map(|rule| self.rule_coder.decode_genome(rule))
            .collect()
    }
}

impl<RC> Coder for PittBoundsCoder<RC>
where
    RC: Coder<Phenome = Vec<f64>>,
{
    type Genome = Vec<RC::Genome>;
    type Phenome = RuleInterpreter;

    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Self::Genome {
        let n = rng.random_range(self.config.min_rules..=self.config.max_rules);
        (0..n)
            .map(|_| self.rule_coder.create_random_genome(rng))
            .collect()
    }

    /// # Panics
    /// Panics if a decoded rule is too short for the interpreter.
    fn decode_genome(&self, genome: &Self::Genome) -> RuleInterpreter {
        RuleInterpreter::new(self.decode_rules(genome), &self.config.interpreter)
    }

    fn copy_genome(&self, genome: &Self::Genome) -> Self::Genome {
        genome
            .iter()
            .map(|rule| self.rule_coder.copy_genome(rule))
            .collect()
    }
}

/// Rule sets whose rules encode each input condition as a single point.
///
/// A decoded rule's first `num_inputs` values are coordinates; each one is
/// widened into a degenerate `(x, x)` bound pair before the rule reaches
/// the interpreter. Memory conditions, if any, keep their explicit pairs.
/// Point rules almost never match exactly, so this coder is meant for
/// nearest-neighbor matching (see [`PittConfig::for_points`]).
#[derive(Debug, Clone)]
pub struct PittPointCoder<RC> {
    inner: PittBoundsCoder<RC>,
}

impl<RC> PittPointCoder<RC>
where
    RC: Coder<Phenome = Vec<f64>>,
{
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(rule_coder: RC, config: PittConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: PittBoundsCoder::new(rule_coder, config)?,
        })
    }

    /// The rule-set configuration.
    pub fn config(&self) -> &PittConfig {
        self.inner.config()
    }

    fn point_to_box(&self, rule: &[f64]) -> Vec<f64> {
        let n = self.inner.config.interpreter.num_inputs;
        assert!(
            rule.len() >= n,
            "point rule has {} elements, expected at least {n}",
            rule.len()
        );
        let mut boxed = Vec::with_capacity(rule.len() + n);
        for &x in &rule[..n] {
            boxed.push(x);
            boxed.push(x);
        }
        boxed.extend_from_slice(&rule[n..]);
        boxed
    }
}

impl<RC> Coder for PittPointCoder<RC>
where
    RC: Coder<Phenome = Vec<f64>>,
{
    type Genome = Vec<RC::Genome>;
    type Phenome = RuleInterpreter;

    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Self::Genome {
        self.inner.create_random_genome(rng)
    }

    /// # Panics
    /// Panics if a decoded rule is too short for the interpreter.
    fn decode_genome(&self, genome: &Self::Genome) -> RuleInterpreter {
        let rules = self
            .inner
            .decode_rules(genome)
            .iter()
            .map(|rule| self.point_to_box(rule))
            .collect();
        RuleInterpreter::new(rules, &self.inner.config.interpreter)
    }

    fn copy_genome(&self, genome: &Self::Genome) -> Self::Genome {
        self.inner.copy_genome(genome)
    }
}
