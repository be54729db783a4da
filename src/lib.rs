//! Pull-driven evolutionary operator pipelines.
//!
//! An evolutionary algorithm here is a chain of [`pipeline::Operator`]s:
//! selection, cloning, variation, evaluation and survival stages that each
//! own one upstream provider and produce individuals only when pulled.
//! Because the stages share one protocol, they compose freely:
//!
//! - **Selection** ([`select`]): deterministic cycling and tournaments
//!   under pluggable comparators, including parsimony pressure.
//! - **Variation** ([`variation`]): per-gene mutation at a probability or
//!   expected count, uniform crossover, self-adaptive step sizes.
//! - **Survival** ([`survive`]): elitism and (μ,λ) / (μ+λ) truncation.
//! - **Oracles** ([`oracle`]): ask/tell optimizers such as CMA-ES plugged
//!   into a pipeline at both ends.
//! - **Rule sets** ([`pitt`]): Pittsburgh-style rule-set genomes decoded
//!   into executable interpreters with memory registers.
//!
//! Genomes are produced and decoded by a [`Coder`](crate::core::Coder); fitness comes
//! from a [`Problem`](crate::core::Problem), which also defines what "better" means.
//! [`ea::GenerationalEa`] drives a pipeline generation by generation.
//!
//! # Architecture
//!
//! The crate contains no domain-specific concepts. Randomness always comes
//! from one caller-owned generator passed down the pull chain, so a run is
//! reproducible from its seed.

pub mod coders;
pub mod core;
pub mod ea;
pub mod error;
pub mod oracle;
pub mod pipeline;
pub mod pitt;
pub mod problems;
pub mod random;
pub mod select;
pub mod survive;
pub mod variation;
