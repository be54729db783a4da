//! Pull-driven operator pipelines.
//!
//! Every stage of an evolutionary generation is an [`Operator`]. Operators
//! chain by owning exactly one upstream provider; the driver holds the
//! most downstream one and, once per generation, calls
//! [`begin_generation`](Operator::begin_generation) followed by
//! [`pull`](Operator::pull) once for each member of the next population.
//!
//! ```text
//! DeterministicSelection -> CloneOp -> UniformCrossover -> BitFlipMutation -> Evaluate -> Elitism
//!        (source)                                                                        (driver pulls here)
//! ```
//!
//! Production is lazy: an operator computes only what one `pull` needs and
//! never pulls further ahead than the current request requires.
//!
//! # Operators in this module
//!
//! - [`CloneOp`]: detaches a private copy of each pulled individual
//! - [`Evaluate`]: scores each pulled individual

mod ops;
mod types;

pub use ops::{CloneOp, Evaluate};
pub use types::{BoxedOperator, Operator};
