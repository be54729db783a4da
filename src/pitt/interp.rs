//! The Pitt rule interpreter.

use super::config::{InterpreterConfig, MatchingMode, RankSource};
use crate::random::pick_index;
use rand::RngCore;

/// A phenome that maps inputs to outputs.
///
/// Rule sets are one implementation; the problems that score them only
/// depend on this trait.
pub trait Executable {
    /// Runs one step. `None` means the phenome has no decision for `input`.
    fn execute(&mut self, input: &[f64], rng: &mut dyn RngCore) -> Option<Vec<f64>>;
}

/// Executes a rule set decoded from a Pitt genome.
///
/// Each [`execute`](Executable::execute) call builds the condition vector
/// (inputs followed by memory registers), scores every rule against it,
/// and fires one rule from the best-scoring set:
///
/// 1. A dimension matches when the value lies between the rule's two bounds,
///    inclusive, in either order. A non-matching dimension contributes the
///    squared distance to its nearer bound.
/// 2. [`MatchingMode`] decides which rules are admitted and how they are
///    scored: exact matching admits full matches only, partial matching
///    scores by unmatched dimensions, nearest neighbor scores by distance.
/// 3. When the best score is zero, only the lowest-ranked rules of the
///    best set remain.
/// 4. The winner is drawn uniformly from what remains; its output slots are
///    returned and its memory slots overwrite the registers.
///
/// Memory registers persist across calls on the same interpreter.
///
/// # Examples
///
/// ```
/// use u_evolve::pitt::{Executable, InterpreterConfig, RuleInterpreter};
/// use u_evolve::random::create_rng;
///
/// // two ranges on one input; the last element is the output
/// let rules = vec![vec![0.0, 5.0, 0.0], vec![5.0, 10.0, 1.0]];
/// let mut interp = RuleInterpreter::new(rules, &InterpreterConfig::new(1, 1));
/// let mut rng = create_rng(42);
///
/// assert_eq!(interp.execute(&[2.0], &mut rng), Some(vec![0.0]));
/// assert_eq!(interp.execute(&[7.0], &mut rng), Some(vec![1.0]));
/// assert_eq!(interp.execute(&[12.0], &mut rng), None);
/// ```
#[derive(Debug, Clone)]
pub struct RuleInterpreter {
    ruleset: Vec<Vec<f64>>,
    ranks: Vec<f64>,
    num_inputs: usize,
    num_outputs: usize,
    matching: MatchingMode,
    memory: Vec<f64>,
    condition: Vec<f64>,
    candidates: Vec<usize>,
}

impl RuleInterpreter {
    /// Creates an interpreter with memory initialized from `config.init_mem`.
    ///
    /// # Panics
    /// Panics if `config` has no condition dimensions or a rule is shorter
    /// than [`InterpreterConfig::min_rule_len`].
    pub fn new(ruleset: Vec<Vec<f64>>, config: &InterpreterConfig) -> Self {
        assert!(
            config.num_conditions() > 0,
            "rule interpreter needs at least one input or memory register"
        );
        let min_len = config.min_rule_len();
        for (i, rule) in ruleset.iter().enumerate() {
            assert!(
                rule.len() >= min_len,
                "rule {i} has {} elements, expected at least {min_len}",
                rule.len()
            );
        }

        let num_conditions = config.num_conditions();
        let ranks = match config.ranking {
            RankSource::Trailing => ruleset.iter().map(|r| r[r.len() - 1]).collect(),
            RankSource::Generality => ruleset
                .iter()
                .map(|r| generality(&r[..2 * num_conditions]))
                .collect(),
        };

        Self {
            ruleset,
            ranks,
            num_inputs: config.num_inputs,
            num_outputs: config.num_outputs,
            matching: config.matching,
            memory: config.init_mem.clone(),
            condition: Vec::with_capacity(num_conditions),
            candidates: Vec::new(),
        }
    }

    /// The rules, in genome order.
    pub fn ruleset(&self) -> &[Vec<f64>] {
        &self.ruleset
    }

    /// Conflict-resolution rank of each rule.
    pub fn ranks(&self) -> &[f64] {
        &self.ranks
    }

    /// Current memory register values.
    pub fn memory(&self) -> &[f64] {
        &self.memory
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.ruleset.len()
    }

    /// Returns `true` if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.ruleset.is_empty()
    }

    fn num_conditions(&self) -> usize {
        self.num_inputs + self.memory.len()
    }

    fn admits(&self, matched: usize) -> bool {
        let all = matched == self.num_conditions();
        match self.matching {
            MatchingMode::Exact => all,
            MatchingMode::Partial => all || matched > 0,
            MatchingMode::NearestNeighbor => true,
        }
    }
}

/// Volume of the condition box, one added per side so that point
/// dimensions still differ.
fn generality(bounds: &[f64]) -> f64 {
    bounds
        .chunks_exact(2)
        .map(|pair| (pair[0] - pair[1]).abs() + 1.0)
        .product()
}

impl Executable for RuleInterpreter {
    /// # Panics
    /// Panics if `input` does not have one value per configured input.
    fn execute(&mut self, input: &[f64], rng: &mut dyn RngCore) -> Option<Vec<f64>> {
        assert_eq!(
            input.len(),
            self.num_inputs,
            "rule interpreter expects {} inputs",
            self.num_inputs
        );
        self.condition.clear();
        self.condition.extend_from_slice(input);
        self.condition.extend_from_slice(&self.memory);

        let mut best = f64::INFINITY;
        self.candidates.clear();
        for (r, rule) in self.ruleset.iter().enumerate() {
            let mut matched = 0;
            let mut distance = 0.0;
            for (c, &x) in self.condition.iter().enumerate() {
                let d1 = rule[2 * c] - x;
                let d2 = rule[2 * c + 1] - x;
                if d1 * d2 <= 0.0 {
                    matched += 1;
                } else {
                    let d = d1.abs().min(d2.abs());
                    distance += d * d;
                }
            }
            if !self.admits(matched) {
                continue;
            }

            let score = match self.matching {
                MatchingMode::NearestNeighbor => distance,
                _ => (self.condition.len() - matched) as f64,
            };
            if self.candidates.is_empty() || score < best {
                best = score;
                self.candidates.clear();
                self.candidates.push(r);
            } else if score == best {
                self.candidates.push(r);
            }
        }

        if self.candidates.is_empty() {
            tracing::trace!(?input, "no rule matched");
            return None;
        }

        if best == 0.0 {
            let ranks = &self.ranks;
            let lowest = self
                .candidates
                .iter()
                .map(|&i| ranks[i])
                .fold(f64::INFINITY, f64::min);
            if self.candidates.iter().any(|&i| ranks[i] == lowest) {
                self.candidates.retain(|&i| ranks[i] == lowest);
            }
        }

        let winner = self.candidates[pick_index(self.candidates.len(), rng)];
        let rule = &self.ruleset[winner];
        let out_start = 2 * self.condition.len();
        let mem_start = out_start + self.num_outputs;
        let mem_end = mem_start + self.memory.len();
        self.memory.copy_from_slice(&rule[mem_start..mem_end]);
        Some(rule[out_start..mem_start].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn interp(rules: &[&[f64]], config: &InterpreterConfig) -> RuleInterpreter {
        RuleInterpreter::new(rules.iter().map(|r| r.to_vec()).collect(), config)
    }

    #[test]
    fn test_binary_wildcard_exact() {
        let rules: &[&[f64]] = &[
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        ];
        let mut it = interp(rules, &InterpreterConfig::new(3, 1));
        let mut rng = create_rng(42);

        assert_eq!(it.execute(&[0.0, 0.0, 0.0], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[0.0, 0.0, 1.0], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[1.0, 0.0, 0.0], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[1.0, 1.0, 0.0], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[1.0, 1.0, 1.0], &mut rng), None);
    }

    #[test]
    fn test_binary_wildcard_partial() {
        let rules: &[&[f64]] = &[
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        ];
        let config = InterpreterConfig::new(3, 1).with_matching(MatchingMode::Partial);
        let mut it = interp(rules, &config);
        let mut rng = create_rng(42);

        for (input, out) in [
            ([0.0, 0.0, 0.0], 0.0),
            ([0.0, 0.0, 1.0], 0.0),
            ([0.0, 1.0, 0.0], 0.0),
            ([1.0, 0.0, 0.0], 0.0),
            ([1.0, 1.0, 1.0], 1.0),
            ([1.0, 1.0, 0.0], 1.0),
            ([1.0, 0.0, 1.0], 1.0),
            ([0.0, 1.0, 1.0], 1.0),
        ] {
            assert_eq!(it.execute(&input, &mut rng), Some(vec![out]), "input {input:?}");
        }
    }

    #[test]
    fn test_memory_round_trip() {
        // in lo/hi, mem lo/hi, out, mem out
        let rules: &[&[f64]] = &[
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0, 0.0, 0.0],
        ];
        let config = InterpreterConfig::new(1, 1).with_memory(vec![0.0]);
        let mut it = interp(rules, &config);
        let mut rng = create_rng(42);

        let mut outputs = Vec::new();
        for x in [1.0, 1.0, 0.0, 1.0] {
            outputs.extend(it.execute(&[x], &mut rng).unwrap());
        }
        assert_eq!(outputs, vec![1.0, 0.0, 0.0, 1.0]);
        assert_eq!(it.memory(), &[1.0]);
    }

    fn quadrants() -> Vec<&'static [f64]> {
        vec![
            &[0.0, 5.0, 0.0, 5.0, 0.0],
            &[0.0, 5.0, 5.0, 10.0, 1.0],
            &[5.0, 0.0, 5.0, 10.0, 1.0],
            &[5.0, 10.0, 0.0, 5.0, 1.0],
            &[5.0, 10.0, 5.0, 10.0, 0.0],
        ]
    }

    #[test]
    fn test_float_bounds_exact() {
        let mut it = interp(&quadrants(), &InterpreterConfig::new(2, 1));
        let mut rng = create_rng(42);

        assert_eq!(it.execute(&[2.5, 2.5], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[2.5, 7.5], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[7.5, 2.5], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[7.5, 7.5], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[-1.0, -1.0], &mut rng), None);
        assert_eq!(it.execute(&[11.0, 11.0], &mut rng), None);
        // every rule touches the centre; the rank-0 rules both say 0
        for _ in 0..10 {
            assert_eq!(it.execute(&[5.0, 5.0], &mut rng), Some(vec![0.0]));
        }
    }

    #[test]
    fn test_float_bounds_partial() {
        let rules: &[&[f64]] = &[&[0.0, 5.0, 0.0, 5.0, 0.0], &[5.0, 10.0, 5.0, 10.0, 1.0]];
        let config = InterpreterConfig::new(2, 1).with_matching(MatchingMode::Partial);
        let mut it = interp(rules, &config);
        let mut rng = create_rng(42);

        assert_eq!(it.execute(&[2.5, 2.5], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[7.5, 7.5], &mut rng), Some(vec![1.0]));
        assert!(it.execute(&[2.5, 7.5], &mut rng).is_some());
        assert_eq!(it.execute(&[5.0, 5.0], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[-1.0, 2.5], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[11.0, 7.5], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[7.5, -1.0], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[-1.0, -1.0], &mut rng), None);
        assert_eq!(it.execute(&[11.0, -1.0], &mut rng), None);
    }

    fn outputs_over(it: &mut RuleInterpreter, input: &[f64], calls: usize) -> Vec<f64> {
        let mut rng = create_rng(7);
        (0..calls)
            .flat_map(|_| it.execute(input, &mut rng).unwrap())
            .collect()
    }

    #[test]
    fn test_partial_tie_ignores_rank() {
        // each rule matches one of the two dimensions; ranks 1 and 9
        let rules: &[&[f64]] = &[&[0.0, 5.0, 0.0, 5.0, 0.0, 1.0], &[5.0, 10.0, 5.0, 10.0, 1.0, 9.0]];
        let config = InterpreterConfig::new(2, 1).with_matching(MatchingMode::Partial);
        let mut it = interp(rules, &config);

        let outputs = outputs_over(&mut it, &[2.5, 7.5], 100);
        assert!(outputs.contains(&0.0));
        assert!(outputs.contains(&1.0));
    }

    #[test]
    fn test_nearest_neighbor_tie_ignores_rank() {
        let rules: &[&[f64]] = &[&[0.0, 0.0, 0.0, 0.0, 0.0, 1.0], &[10.0, 10.0, 10.0, 10.0, 1.0, 9.0]];
        let config = InterpreterConfig::new(2, 1).with_matching(MatchingMode::NearestNeighbor);
        let mut it = interp(rules, &config);

        let outputs = outputs_over(&mut it, &[5.0, 5.0], 100);
        assert!(outputs.contains(&0.0));
        assert!(outputs.contains(&1.0));
    }

    #[test]
    fn test_float_bounds_nearest_neighbor() {
        let rules: &[&[f64]] = &[
            &[0.0, 5.0, 0.0, 5.0, 0.0],
            &[0.0, 5.0, 5.0, 10.0, 1.0],
            &[5.0, 10.0, 0.0, 5.0, 1.0],
            &[5.0, 10.0, 5.0, 10.0, 0.0],
        ];
        let config = InterpreterConfig::new(2, 1).with_matching(MatchingMode::NearestNeighbor);
        let mut it = interp(rules, &config);
        let mut rng = create_rng(42);

        for (input, out) in [
            ([2.5, 2.5], 0.0),
            ([5.0, 5.0], 0.0),
            ([-1.0, 2.5], 0.0),
            ([-1.0, 7.5], 1.0),
            ([11.0, 2.5], 1.0),
            ([11.0, 7.5], 0.0),
            ([-1.0, -1.0], 0.0),
            ([-1.0, 11.0], 1.0),
            ([11.0, 11.0], 0.0),
        ] {
            assert_eq!(it.execute(&input, &mut rng), Some(vec![out]), "input {input:?}");
        }
    }

    #[test]
    fn test_point_rules_nearest_neighbor() {
        let rules: &[&[f64]] = &[
            &[2.5, 2.5, 2.5, 2.5, 0.0],
            &[2.5, 2.5, 7.5, 7.5, 1.0],
            &[7.5, 7.5, 2.5, 2.5, 1.0],
            &[7.5, 7.5, 7.5, 7.5, 0.0],
        ];
        let config = InterpreterConfig::new(2, 1).with_matching(MatchingMode::NearestNeighbor);
        let mut it = interp(rules, &config);
        let mut rng = create_rng(42);

        assert_eq!(it.execute(&[2.0, 2.0], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[2.0, 8.0], &mut rng), Some(vec![1.0]));
        assert_eq!(it.execute(&[8.0, 8.0], &mut rng), Some(vec![0.0]));
        assert_eq!(it.execute(&[11.0, -1.0], &mut rng), Some(vec![1.0]));

        // equidistant from all four points
        let outcomes: std::collections::HashSet<u64> = (0..50)
            .filter_map(|_| it.execute(&[5.0, 5.0], &mut rng))
            .map(|out| out[0].to_bits())
            .collect();
        assert_eq!(outcomes.len(), 2);
    }

    #[test]
    fn test_generality_prefers_specific_rules() {
        // both cover 1.0; the narrower one must fire
        let rules: &[&[f64]] = &[&[0.0, 4.0, 7.0], &[0.5, 1.5, 3.0]];
        let config = InterpreterConfig::new(1, 1).with_ranking(RankSource::Generality);
        let mut it = interp(rules, &config);
        let mut rng = create_rng(42);

        assert_eq!(it.ranks(), &[5.0, 2.0]);
        for _ in 0..10 {
            assert_eq!(it.execute(&[1.0], &mut rng), Some(vec![3.0]));
        }
    }

    #[test]
    fn test_trailing_rank_field() {
        let rules: &[&[f64]] = &[&[0.0, 4.0, 7.0, 2.0], &[0.5, 1.5, 3.0, 9.0]];
        let mut it = interp(rules, &InterpreterConfig::new(1, 1));
        let mut rng = create_rng(42);
        assert_eq!(it.execute(&[1.0], &mut rng), Some(vec![7.0]));
    }

    #[test]
    fn test_empty_ruleset_has_no_decision() {
        let config = InterpreterConfig::new(1, 1).with_matching(MatchingMode::NearestNeighbor);
        let mut it = RuleInterpreter::new(Vec::new(), &config);
        let mut rng = create_rng(42);
        assert!(it.is_empty());
        assert_eq!(it.execute(&[0.0], &mut rng), None);
    }

    #[test]
    #[should_panic(expected = "expects 2 inputs")]
    fn test_input_length_mismatch_panics() {
        let mut it = interp(&quadrants(), &InterpreterConfig::new(2, 1));
        let mut rng = create_rng(42);
        it.execute(&[1.0], &mut rng);
    }

    #[test]
    #[should_panic(expected = "expected at least 7")]
    fn test_short_rule_panics() {
        interp(&[&[0.0, 1.0, 0.0]], &InterpreterConfig::new(3, 1));
    }

    #[test]
    #[should_panic(expected = "at least one input or memory register")]
    fn test_conditionless_config_panics() {
        let _ = RuleInterpreter::new(vec![vec![]], &InterpreterConfig::new(0, 0));
    }

    proptest! {
        #[test]
        fn prop_nearest_neighbor_always_decides(
            rules in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 5), 1..12),
            x in -20.0f64..20.0,
            y in -20.0f64..20.0,
            seed in any::<u64>(),
        ) {
            let config = InterpreterConfig::new(2, 1).with_matching(MatchingMode::NearestNeighbor);
            let mut it = RuleInterpreter::new(rules, &config);
            let mut rng = create_rng(seed);
            prop_assert!(it.execute(&[x, y], &mut rng).is_some());
        }
    }
}
