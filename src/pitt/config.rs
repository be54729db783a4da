//! Interpreter and rule-set coder configuration.

use crate::error::ConfigError;

/// Which rules may fire for a given condition vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchingMode {
    /// Only rules matching every condition dimension.
    #[default]
    Exact,
    /// Rules matching at least one dimension; the most dimensions win.
    Partial,
    /// Every rule; the smallest squared distance wins.
    NearestNeighbor,
}

/// Where a rule's conflict-resolution rank comes from.
///
/// Ranks only matter among rules that match every dimension; the lowest
/// rank wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankSource {
    /// The rule's last element.
    #[default]
    Trailing,
    /// The rule's generality `∏(|lo - hi| + 1)` over its conditions, so the
    /// most specific rule wins.
    Generality,
}

/// Shape and behavior of a [`RuleInterpreter`](super::RuleInterpreter).
///
/// A rule is laid out as
///
/// ```text
/// [ in_0 lo/hi .. in_n lo/hi | mem_0 lo/hi .. mem_m lo/hi | out_0 .. out_k | mem_0 .. mem_m | rank? ]
/// ```
///
/// where condition bound pairs are unordered.
///
/// # Examples
///
/// ```
/// use u_evolve::pitt::{InterpreterConfig, MatchingMode};
///
/// let config = InterpreterConfig::new(2, 1)
///     .with_memory(vec![0.0])
///     .with_matching(MatchingMode::Partial);
///
/// assert_eq!(config.num_conditions(), 3);
/// assert_eq!(config.num_actions(), 2);
/// assert_eq!(config.min_rule_len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpreterConfig {
    /// Number of external inputs.
    pub num_inputs: usize,
    /// Number of external outputs.
    pub num_outputs: usize,
    /// Initial memory register values; the register count is its length.
    pub init_mem: Vec<f64>,
    /// Rule admission policy.
    pub matching: MatchingMode,
    /// Rank source for conflict resolution.
    pub ranking: RankSource,
}

impl InterpreterConfig {
    /// Exact matching, trailing ranks, no memory.
    pub fn new(num_inputs: usize, num_outputs: usize) -> Self {
        Self {
            num_inputs,
            num_outputs,
            init_mem: Vec::new(),
            matching: MatchingMode::default(),
            ranking: RankSource::default(),
        }
    }

    /// Sets the initial memory registers.
    pub fn with_memory(mut self, init_mem: Vec<f64>) -> Self {
        self.init_mem = init_mem;
        self
    }

    /// Sets the matching mode.
    pub fn with_matching(mut self, matching: MatchingMode) -> Self {
        self.matching = matching;
        self
    }

    /// Sets the rank source.
    pub fn with_ranking(mut self, ranking: RankSource) -> Self {
        self.ranking = ranking;
        self
    }

    /// Number of memory registers.
    pub fn num_memory(&self) -> usize {
        self.init_mem.len()
    }

    /// Condition dimensions: inputs plus memory registers.
    pub fn num_conditions(&self) -> usize {
        self.num_inputs + self.num_memory()
    }

    /// Action slots: outputs plus memory registers.
    pub fn num_actions(&self) -> usize {
        self.num_outputs + self.num_memory()
    }

    /// Shortest rule the interpreter accepts.
    pub fn min_rule_len(&self) -> usize {
        2 * self.num_conditions() + self.num_actions()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_conditions() == 0 {
            return Err(ConfigError::CountTooSmall {
                name: "num_inputs",
                min: 1,
                value: 0,
            });
        }
        Ok(())
    }
}

/// Rule-set coder configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PittConfig {
    /// Fewest rules in a random genome.
    pub min_rules: usize,
    /// Most rules in a random genome.
    pub max_rules: usize,
    /// Configuration of the decoded interpreters.
    pub interpreter: InterpreterConfig,
}

impl PittConfig {
    /// Random genomes hold between `min_rules` and `max_rules` rules.
    pub fn new(min_rules: usize, max_rules: usize, interpreter: InterpreterConfig) -> Self {
        Self {
            min_rules,
            max_rules,
            interpreter,
        }
    }

    /// Preset for point rules: nearest-neighbor matching.
    ///
    /// Point rules rarely match exactly, so exact or partial matching would
    /// leave most inputs without a decision.
    pub fn for_points(
        min_rules: usize,
        max_rules: usize,
        num_inputs: usize,
        num_outputs: usize,
    ) -> Self {
        Self::new(
            min_rules,
            max_rules,
            InterpreterConfig::new(num_inputs, num_outputs)
                .with_matching(MatchingMode::NearestNeighbor),
        )
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rules == 0 {
            return Err(ConfigError::CountTooSmall {
                name: "min_rules",
                min: 1,
                value: 0,
            });
        }
        if self.min_rules > self.max_rules {
            return Err(ConfigError::RuleCountRange {
                min: self.min_rules,
                max: self.max_rules,
            });
        }
        self.interpreter.validate()
    }
}
