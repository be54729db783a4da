//! Core contracts shared by every operator.
//!
//! A [`Coder`] knows how to create, decode and copy one kind of genome; a
//! [`Problem`] knows how to score a decoded phenome and how to order two
//! scores. An [`Individual`] binds a genome to both, caching its fitness.
//!
//! Fitness values are plain `f64`, but no code in this crate compares them
//! numerically: "better" is whatever [`Problem::better_than`] says, so
//! maximization, minimization and tolerance-based equivalence all work
//! unchanged.
//!
//! # Genome traversal
//!
//! - [`GenomeSize`]: leaf-gene counting for flat and nested genomes
//! - [`GeneTree`]: visits every leaf gene of a given type mutably
//! - [`Chromosome`]: aligned, position-wise gene exchange for crossover

mod genome;
mod individual;
mod types;

pub use genome::{Chromosome, GeneTree, GenomeSize};
pub use individual::{Individual, Population};
pub use types::{Coder, Problem};
