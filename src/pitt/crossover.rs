//! Rule-transfer crossover for variable-length rule sets.

use crate::core::{Coder, Individual};
use crate::error::{check_probability, ConfigError};
use crate::pipeline::{BoxedOperator, Operator};
use rand::{Rng, RngCore};
use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

/// Pulls parents in pairs and moves whole rules between them.
///
/// With probability `p_cross` a pair is recombined: every rule of each
/// parent moves to the opposite child with probability `p_xfer`, so rule
/// counts change but no rule is lost or duplicated. A child left without
/// rules is not emitted; if both are empty, the first parent is emitted
/// unchanged instead.
pub struct PittUniformCrossover<C: Coder, P> {
    provider: BoxedOperator<C, P>,
    p_cross: f64,
    p_xfer: f64,
    pending: VecDeque<Arc<Individual<C, P>>>,
}

impl<C: Coder + 'static, P: 'static> PittUniformCrossover<C, P> {
    /// Wraps `provider`.
    ///
    /// # Errors
    /// Returns an error if either probability is outside `[0, 1]`.
    pub fn new(
        provider: impl Operator<C, P> + 'static,
        p_cross: f64,
        p_xfer: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            provider: Box::new(provider),
            p_cross: check_probability("p_cross", p_cross)?,
            p_xfer: check_probability("p_xfer", p_xfer)?,
            pending: VecDeque::with_capacity(2),
        })
    }
}

impl<C, P, G> Operator<C, P> for PittUniformCrossover<C, P>
where
    C: Coder<Genome = Vec<G>>,
{
    fn begin_generation(&mut self, population: &[Arc<Individual<C, P>>]) {
        self.pending.clear();
        self.provider.begin_generation(population);
    }

    fn pull(&mut self, rng: &mut dyn RngCore) -> Arc<Individual<C, P>> {
        if let Some(child) = self.pending.pop_front() {
            return child;
        }

        let mut mother = self.provider.pull(rng);
        let mut father = self.provider.pull(rng);
        if rng.random::<f64>() >= self.p_cross {
            self.pending.push_back(father);
            return mother;
        }

        let m = Arc::make_mut(&mut mother);
        let f = Arc::make_mut(&mut father);
        let mut daughter = Vec::with_capacity(m.genome.len());
        let mut son = Vec::with_capacity(f.genome.len());
        for rule in mem::take(&mut m.genome) {
            if rng.random::<f64>() < self.p_xfer {
                son.push(rule);
            } else {
                daughter.push(rule);
            }
        }
        for rule in mem::take(&mut f.genome) {
            if rng.random::<f64>() < self.p_xfer {
                daughter.push(rule);
            } else {
                son.push(rule);
            }
        }
        m.genome = daughter;
        f.genome = son;

        match (mother.genome.is_empty(), father.genome.is_empty()) {
            (false, false) => {
                self.pending.push_back(father);
                mother
            }
            (false, true) => mother,
            (true, false) => father,
            (true, true) => {
                tracing::trace!("both rule-set children empty");
                mother
            }
        }
    }
}
