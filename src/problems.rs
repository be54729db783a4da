//! Stock problems.
//!
//! Real applications implement [`Problem`] themselves; these two cover
//! the classic benchmarks and are what the tests and benchmarks run on.

use crate::core::Problem;
use rand::RngCore;

/// Whether larger or smaller fitness values are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Larger is better.
    #[default]
    Maximize,
    /// Smaller is better.
    Minimize,
}

impl Objective {
    fn better(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Maximize => a > b,
            Objective::Minimize => a < b,
        }
    }
}

/// Match a target bit string; fitness is the number of agreeing positions.
///
/// With an all-ones target this is OneMax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityProblem {
    target: Vec<bool>,
}

impl SimilarityProblem {
    /// Creates a problem for the given target string.
    pub fn new(target: Vec<bool>) -> Self {
        Self { target }
    }

    /// OneMax over `n` bits.
    pub fn one_max(n: usize) -> Self {
        Self::new(vec![true; n])
    }
}

impl Problem<Vec<bool>> for SimilarityProblem {
    fn evaluate(&self, phenome: &mut Vec<bool>, _rng: &mut dyn RngCore) -> f64 {
        phenome
            .iter()
            .zip(&self.target)
            .filter(|(p, t)| p == t)
            .count() as f64
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        a > b
    }

    fn equivalent_to(&self, a: f64, b: f64) -> bool {
        a == b
    }
}

/// Optimize a plain function of a real vector.
pub struct FunctionProblem<F> {
    function: F,
    objective: Objective,
}

impl<F> FunctionProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    /// Wraps `function` with the given optimization direction.
    pub fn new(function: F, objective: Objective) -> Self {
        Self {
            function,
            objective,
        }
    }

    /// The optimization direction.
    pub fn objective(&self) -> Objective {
        self.objective
    }
}

impl<F> Problem<Vec<f64>> for FunctionProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, phenome: &mut Vec<f64>, _rng: &mut dyn RngCore) -> f64 {
        (self.function)(phenome)
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        self.objective.better(a, b)
    }

    fn equivalent_to(&self, a: f64, b: f64) -> bool {
        a == b
    }
}
