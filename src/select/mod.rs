//! Parent selection.
//!
//! Selection operators are pipeline sources: they hold no provider and
//! draw directly from the prior population bound at
//! [`begin_generation`](crate::pipeline::Operator::begin_generation). The
//! individuals they return are shared with that population; put a
//! [`CloneOp`](crate::pipeline::CloneOp) downstream before varying them.
//!
//! # Operators
//!
//! - [`DeterministicSelection`]: every member once per pass, optionally
//!   reshuffled between passes
//! - [`TournamentSelection`]: best of `k` contestants, random tie-breaks
//!
//! # Comparators
//!
//! Operators that rank individuals (tournament selection, elitism, μ/λ
//! survival) take a [`Comparator`]:
//!
//! - [`FitnessOrder`]: the problem's own order (default)
//! - [`LexicographicParsimony`]: fitness, then shorter genome
//! - [`PenaltyParsimony`]: fitness adjusted by a per-gene penalty
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Luke & Panait (2002), "Lexicographic Parsimony Pressure"

mod comparator;
mod deterministic;
mod tournament;

pub(crate) use comparator::rank_top;
pub use comparator::{Comparator, FitnessOrder, LexicographicParsimony, PenaltyParsimony};
pub use deterministic::DeterministicSelection;
pub use tournament::TournamentSelection;
