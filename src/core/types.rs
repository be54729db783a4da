//! Core trait definitions: the capability sets every genome
//! representation and every problem must provide.

use rand::RngCore;
use std::fmt::Debug;

/// Creates, decodes and copies genomes of one representation.
///
/// A coder never stores genomes itself; it only acts on them. Swapping
/// one coder for another changes the representation without touching the
/// rest of the pipeline.
///
/// # Implementing
///
/// ```ignore
/// struct Bits(usize);
///
/// impl Coder for Bits {
///     type Genome = Vec<bool>;
///     type Phenome = Vec<bool>;
///
///     fn create_random_genome(&self, rng: &mut dyn RngCore) -> Vec<bool> {
///         (0..self.0).map(|_| rng.random_bool(0.5)).collect()
///     }
///
///     fn decode_genome(&self, genome: &Vec<bool>) -> Vec<bool> {
///         genome.clone()
///     }
/// }
/// ```
pub trait Coder: Send + Sync {
    /// The evolvable representation.
    type Genome: Clone + Debug + Send + Sync;

    /// The decoded, usable form handed to [`Problem::evaluate`].
    type Phenome;

    /// Creates a random genome.
    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Self::Genome;

    /// Decodes a genome into its phenome.
    fn decode_genome(&self, genome: &Self::Genome) -> Self::Phenome;

    /// Returns an independent copy of `genome`.
    ///
    /// The default is a full `Clone`, which is always safe for nested
    /// genomes. Flat representations may override it with something
    /// cheaper.
    fn copy_genome(&self, genome: &Self::Genome) -> Self::Genome {
        genome.clone()
    }
}

/// Scores phenomes and orders the resulting fitness values.
///
/// For any two fitness values exactly one of *better*, *equivalent* or
/// *worse* must hold: `better_than(a, b)`, `equivalent_to(a, b)`, or
/// `better_than(b, a)`. The order does not need to be total in the
/// mathematical sense (tolerance-based equivalence is fine).
pub trait Problem<Ph>: Send + Sync {
    /// Computes the fitness of a phenome.
    ///
    /// The phenome is borrowed mutably because executable phenomes (such
    /// as rule interpreters with memory) change state while being run.
    /// `rng` is the run's shared generator; stochastic phenomes draw their
    /// tie-breaks from it.
    fn evaluate(&self, phenome: &mut Ph, rng: &mut dyn RngCore) -> f64;

    /// Returns `true` if `a` is strictly better than `b`.
    fn better_than(&self, a: f64, b: f64) -> bool;

    /// Returns `true` if `a` and `b` are equally good.
    fn equivalent_to(&self, a: f64, b: f64) -> bool;
}
