//! Variation operators: mutation and crossover.
//!
//! Variation operators change genomes and leave fitness alone. They take
//! exclusive access to each pulled individual through
//! [`Arc::make_mut`](std::sync::Arc::make_mut), so a shared parent is copied
//! rather than modified; a [`CloneOp`](crate::pipeline::CloneOp) upstream
//! makes that copy explicit and happens once.
//!
//! # Operators
//!
//! - [`Mutation`] with a [`GeneMutator`] rule ([`BitFlipMutation`],
//!   [`GaussianMutation`]): independent per-gene mutation at a
//!   [`MutationRate`], recursing through nested genomes
//! - [`UniformCrossover`]: pairwise aligned gene exchange
//! - [`AdaptiveMutation`]: self-adaptive step sizes for `(value, sigma)` genes
//!
//! Variable-length rule-set crossover lives in
//! [`pitt::PittUniformCrossover`](crate::pitt::PittUniformCrossover).

mod adaptive;
mod config;
mod crossover;
mod mutation;

pub use adaptive::AdaptiveMutation;
pub use config::MutationRate;
pub use crossover::UniformCrossover;
pub use mutation::{BitFlip, BitFlipMutation, Gaussian, GaussianMutation, GeneMutator, Mutation};
