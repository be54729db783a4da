//! Survival selection.
//!
//! Survival operators sit at the downstream end of a pipeline and decide
//! which individuals make up the next generation.
//!
//! - [`Elitism`]: the best `k` of the prior population pass through
//!   unchanged, ahead of everything the provider produces
//! - [`MuLambdaSurvival`]: (μ,λ) or (μ+λ) truncation, see [`SurvivalPool`]
//!
//! Both rank with a [`Comparator`](crate::select::Comparator) and break
//! ties uniformly at random.
//!
//! # References
//!
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"
//! - Schwefel (1981), *Numerical Optimization of Computer Models*

mod elitism;
mod mu_lambda;

pub use elitism::Elitism;
pub use mu_lambda::{MuLambdaSurvival, SurvivalPool};
