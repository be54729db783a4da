//! Pittsburgh-style rule-set evolution.
//!
//! A Pittsburgh individual is a whole rule set. Each rule maps a box of
//! condition bounds to a vector of actions:
//!
//! ```text
//! if lo_0 <= x_0 <= hi_0 && ... then outputs, memory writes
//! ```
//!
//! Conditions range over the external inputs followed by the interpreter's
//! memory registers, so rule sets can carry state between calls.
//!
//! # Components
//!
//! - [`RuleInterpreter`]: the decoded phenome; implements [`Executable`]
//!   with exact, partial or nearest-neighbor matching
//!   ([`MatchingMode`]) and rank-based conflict resolution ([`RankSource`])
//! - [`PittBoundsCoder`] / [`PittPointCoder`]: variable-length rule-set
//!   genomes built from any per-rule coder producing `Vec<f64>`
//! - [`PittUniformCrossover`]: rule-transfer recombination
//!
//! # References
//!
//! - Smith, S. F. (1980). *A Learning System Based on Genetic Adaptive
//!   Algorithms*. PhD thesis, University of Pittsburgh.
//! - De Jong, K. A., Spears, W. M. & Gordon, D. F. (1993). Using genetic
//!   algorithms for concept learning. *Machine Learning* 13, 161–188.

mod coder;
mod config;
mod crossover;
mod interp;

pub use coder::{PittBoundsCoder, PittPointCoder};
pub use config::{InterpreterConfig, MatchingMode, PittConfig, RankSource};
pub use crossover::PittUniformCrossover;
pub use interp::{Executable, RuleInterpreter};
