//! Pluggable orderings over individuals.

use crate::core::{Coder, GenomeSize, Individual, Problem};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::cmp::Ordering;
use std::sync::Arc;

/// Orders two individuals for selection and survival.
///
/// `Ordering::Greater` means `a` is better than `b`, `Equal` means they
/// tie. Ties are broken uniformly at random by the operators that use the
/// comparator, never by the comparator itself.
pub trait Comparator<C: Coder, P> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &Individual<C, P>, b: &Individual<C, P>) -> Ordering;
}

/// Plain fitness order, as defined by the problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitnessOrder;

impl<C, P> Comparator<C, P> for FitnessOrder
where
    C: Coder,
    P: Problem<C::Phenome>,
{
    fn compare(&self, a: &Individual<C, P>, b: &Individual<C, P>) -> Ordering {
        if a.better_than(b) {
            Ordering::Greater
        } else if a.equivalent_to(b) {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    }
}

/// Fitness first; among equivalent fitnesses the shorter genome wins.
///
/// Length is the number of top-level genome elements (rules, for a Pitt
/// genome).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicographicParsimony;

impl<C, P> Comparator<C, P> for LexicographicParsimony
where
    C: Coder,
    C::Genome: GenomeSize,
    P: Problem<C::Phenome>,
{
    fn compare(&self, a: &Individual<C, P>, b: &Individual<C, P>) -> Ordering {
        match FitnessOrder.compare(a, b) {
            Ordering::Equal => b.genome.length().cmp(&a.genome.length()),
            other => other,
        }
    }
}

/// Compares fitnesses adjusted by `gene_count * penalty`.
///
/// The adjusted values are ordered by the problem, so the penalty must
/// point in the "worse" direction: negative when maximizing, positive
/// when minimizing. Unevaluated individuals still rank below evaluated
/// ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyParsimony {
    /// Fitness adjustment per leaf gene.
    pub penalty: f64,
}

impl PenaltyParsimony {
    /// Creates a comparator with the given per-gene penalty.
    pub fn new(penalty: f64) -> Self {
        Self { penalty }
    }
}

impl<C, P> Comparator<C, P> for PenaltyParsimony
where
    C: Coder,
    C::Genome: GenomeSize,
    P: Problem<C::Phenome>,
{
    fn compare(&self, a: &Individual<C, P>, b: &Individual<C, P>) -> Ordering {
        let (fa, fb) = match (a.fitness(), b.fitness()) {
            (Some(fa), Some(fb)) => (fa, fb),
            _ => return FitnessOrder.compare(a, b),
        };
        let fa = fa + a.size() as f64 * self.penalty;
        let fb = fb + b.size() as f64 * self.penalty;
        let problem = a.problem();
        if problem.better_than(fa, fb) {
            Ordering::Greater
        } else if problem.equivalent_to(fa, fb) {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    }
}

/// Returns the `k` best members of `pool`, best first.
///
/// The pool is shuffled and then stably merge-sorted, so tied individuals
/// come out in uniformly random order. The merge only ever asks whether
/// one individual beats another, so a comparator that is not a strict
/// total order (tolerance-based equivalence) cannot break the sort.
pub(crate) fn rank_top<C: Coder, P>(
    mut pool: Vec<Arc<Individual<C, P>>>,
    k: usize,
    cmp: &dyn Comparator<C, P>,
    rng: &mut dyn RngCore,
) -> Vec<Arc<Individual<C, P>>> {
    pool.shuffle(rng);
    let mut ranked = sort_best_first(pool, cmp);
    ranked.truncate(k);
    ranked
}

fn sort_best_first<C: Coder, P>(
    mut pool: Vec<Arc<Individual<C, P>>>,
    cmp: &dyn Comparator<C, P>,
) -> Vec<Arc<Individual<C, P>>> {
    if pool.len() <= 1 {
        return pool;
    }
    let right = pool.split_off(pool.len() / 2);
    let left = sort_best_first(pool, cmp);
    let right = sort_best_first(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // the left run wins ties
        let take_right = cmp.compare(r, l) == Ordering::Greater;
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
