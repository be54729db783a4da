//! The ask/tell contract.

use rand::RngCore;
use std::cell::RefCell;
use std::rc::Rc;

/// An external optimizer driven by batches of candidates.
///
/// Each generation the pipeline asks for one batch of genomes, evaluates
/// them, and tells the oracle the results. How the oracle turns results
/// into the next batch (covariance adaptation, estimation of
/// distribution, ...) is its own business.
pub trait AskTellOracle {
    /// Candidate representation; matches the coder's genome.
    type Genome;

    /// Returns the next batch of candidates.
    fn ask(&mut self, rng: &mut dyn RngCore) -> Vec<Self::Genome>;

    /// Reports the fitness of each candidate of the last batch.
    ///
    /// `genomes` and `fitnesses` are parallel and have
    /// [`popsize`](AskTellOracle::popsize) entries.
    fn tell(&mut self, genomes: &[Self::Genome], fitnesses: &[f64]);

    /// Number of candidates per batch.
    fn popsize(&self) -> usize;
}

/// An oracle shared by the [`Generate`](super::Generate) and
/// [`Update`](super::Update) ends of one pipeline.
pub type SharedOracle<O> = Rc<RefCell<O>>;
