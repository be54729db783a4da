//! Generational EA driver.
//!
//! Operators only describe how one generation is produced from the last.
//! [`GenerationalEa`] supplies the rest of the loop: the random initial
//! population, its evaluation, one pipeline rebind per generation and the
//! best-so-far bookkeeping.
//!
//! # Key Types
//!
//! - [`EaConfig`]: population size, generation count, seed, parallelism
//! - [`GenerationalEa`]: runs the loop, whole or one [`step`](GenerationalEa::step) at a time
//! - [`EaResult`]: best individual and fitness history
//!
//! # References
//!
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*
//! - Luke (2013), *Essentials of Metaheuristics*, 2nd ed.

mod config;
mod runner;

pub use config::EaConfig;
pub use runner::{EaResult, GenerationalEa};
